use serde::{Deserialize, Serialize};

/// File format produced by the export endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Csv,
    Excel,
}

impl ExportFormat {
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Pdf, ExportFormat::Csv, ExportFormat::Excel]
    }

    /// Backend endpoint generating the file
    pub fn path(&self) -> &'static str {
        match self {
            Self::Pdf => "/api/reports/pdf",
            Self::Csv => "/api/reports/csv",
            Self::Excel => "/api/reports/excel",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Csv => "text/csv",
            Self::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
            Self::Excel => "xlsx",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Csv => "CSV",
            Self::Excel => "Excel",
        }
    }

    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mapping() {
        assert_eq!(ExportFormat::Pdf.path(), "/api/reports/pdf");
        assert_eq!(ExportFormat::Csv.mime_type(), "text/csv");
        assert_eq!(
            ExportFormat::Excel.mime_type(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(ExportFormat::Excel.file_name("employee_report"), "employee_report.xlsx");
    }

    #[test]
    fn test_paths_are_distinct() {
        let all = ExportFormat::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.path(), b.path());
                assert_ne!(a.extension(), b.extension());
            }
        }
    }
}
