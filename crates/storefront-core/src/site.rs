//! Process-wide site identity used in footer copy.

pub const DEFAULT_COPYRIGHT_NAME: &str = "Perth Dry Cleaning Supplies";
pub const DEFAULT_COPYRIGHT_START_YEAR: i32 = 2023;

/// Site identity, built once at startup and injected into request handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_name: Option<String>,
    pub company_name: Option<String>,
    pub copyright_start_year: i32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: None,
            company_name: None,
            copyright_start_year: DEFAULT_COPYRIGHT_START_YEAR,
        }
    }
}

impl SiteConfig {
    /// Name shown in the copyright line: company, then site, then the built-in default.
    #[must_use]
    pub fn copyright_name(&self) -> &str {
        self.company_name
            .as_deref()
            .or(self.site_name.as_deref())
            .unwrap_or(DEFAULT_COPYRIGHT_NAME)
    }

    /// `"2023"` in the start year itself, `"2023-2026"` afterwards.
    #[must_use]
    pub fn copyright_range(&self, current_year: i32) -> String {
        let start = self.copyright_start_year;
        if current_year > start {
            format!("{start}-{current_year}")
        } else {
            start.to_string()
        }
    }

    #[must_use]
    pub fn copyright_notice(&self, current_year: i32) -> String {
        format!(
            "© {} {}. All rights reserved.",
            self.copyright_range(current_year),
            self.copyright_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(company: Option<&str>, site: Option<&str>) -> SiteConfig {
        SiteConfig {
            site_name: site.map(str::to_string),
            company_name: company.map(str::to_string),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn copyright_name_prefers_company_name() {
        assert_eq!(
            site(Some("Acme Pty Ltd"), Some("Acme")).copyright_name(),
            "Acme Pty Ltd"
        );
    }

    #[test]
    fn copyright_name_falls_back_to_site_name() {
        assert_eq!(site(None, Some("Acme")).copyright_name(), "Acme");
    }

    #[test]
    fn copyright_name_falls_back_to_default() {
        assert_eq!(site(None, None).copyright_name(), DEFAULT_COPYRIGHT_NAME);
    }

    #[test]
    fn copyright_range_is_single_year_in_start_year() {
        assert_eq!(site(None, None).copyright_range(2023), "2023");
    }

    #[test]
    fn copyright_range_spans_to_current_year() {
        assert_eq!(site(None, None).copyright_range(2026), "2023-2026");
    }

    #[test]
    fn copyright_notice_formats_full_line() {
        assert_eq!(
            site(Some("Acme"), None).copyright_notice(2025),
            "© 2023-2025 Acme. All rights reserved."
        );
    }
}
