//! Display text for columns, buttons and notices

use contracts::dashboards::d100_report_generator::ExportFormat;

/// `employee_name` -> `employee name`
pub fn column_label(name: &str) -> String {
    name.replace('_', " ")
}

/// `employee_name` -> `EMPLOYEE NAME`
pub fn header_label(name: &str) -> String {
    column_label(name).to_uppercase()
}

pub fn export_button_label(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Pdf => "Download PDF",
        ExportFormat::Csv => "Export CSV",
        ExportFormat::Excel => "Export Excel",
    }
}

pub fn export_failure_message(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Pdf => "Failed to generate PDF report",
        ExportFormat::Csv => "Failed to generate CSV",
        ExportFormat::Excel => "Failed to generate Excel",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_labels() {
        assert_eq!(column_label("employee_name"), "employee name");
        assert_eq!(column_label("hours"), "hours");
        assert_eq!(header_label("hire_date"), "HIRE DATE");
    }

    #[test]
    fn test_export_texts() {
        assert_eq!(export_button_label(ExportFormat::Pdf), "Download PDF");
        assert_eq!(export_button_label(ExportFormat::Excel), "Export Excel");
        assert_eq!(
            export_failure_message(ExportFormat::Csv),
            "Failed to generate CSV"
        );
    }
}
