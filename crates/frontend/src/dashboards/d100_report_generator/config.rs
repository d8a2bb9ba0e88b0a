/// File stem of downloaded exports
const DEFAULT_FILE_STEM: &str = "employee_report";

/// Where the report backend lives and how exports are named
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub api_base: String,
    pub file_stem: String,
}

impl ReportConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            file_stem: DEFAULT_FILE_STEM.to_string(),
        }
    }

    /// Build-time `REPORT_API_BASE` if set, otherwise the current host on port 3000
    pub fn from_browser() -> Self {
        match option_env!("REPORT_API_BASE") {
            Some(base) => Self::new(base),
            None => Self::new(same_host_backend()),
        }
    }

    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

/// Backend listens on port 3000 of the host serving the page; empty when
/// there is no window, which keeps requests same-origin.
fn same_host_backend() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return String::new();
    };
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    match location.hostname() {
        Ok(host) => format!("{}//{}:3000", protocol, host),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = ReportConfig::new("https://reports.example.com/");
        assert_eq!(
            config.url("/api/reports/columns"),
            "https://reports.example.com/api/reports/columns"
        );
        assert_eq!(config.file_stem, "employee_report");
    }

    #[test]
    fn test_empty_base_gives_relative_urls() {
        let config = ReportConfig::new("").with_file_stem("payroll");
        assert_eq!(config.url("/api/reports"), "/api/reports");
        assert_eq!(config.file_stem, "payroll");
    }
}
