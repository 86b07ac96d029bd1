//! Payload, signature and header lists
//!
//! Detection data is configuration, not engine logic: every list here can be
//! overridden from the TOML config file, which keeps the detectors testable
//! against synthetic fixtures. Defaults cover the common cases.

use serde::{Deserialize, Serialize};

/// Injectable detection data shared by all detectors
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Payloads {
    /// XSS marker payloads tested for unescaped reflection
    pub xss_payloads: Vec<String>,

    /// Error-inducing SQL metacharacter payloads
    pub sqli_payloads: Vec<String>,

    /// Database error signatures as regex patterns, paired with the vendor
    pub sql_error_patterns: Vec<(String, String)>,

    /// Always-true condition suffix for the boolean differential check
    pub sqli_true_suffix: String,

    /// Always-false condition suffix for the boolean differential check
    pub sqli_false_suffix: String,

    /// Body-length delta (bytes) above which the boolean differential check
    /// flags a parameter. Approximate by nature; tune per target.
    pub boolean_length_threshold: usize,

    /// Parameter names commonly used for redirects
    pub redirect_param_names: Vec<String>,

    /// External canary URL injected by the redirect detector
    pub redirect_canary: String,

    /// Security headers expected on every response
    pub required_headers: Vec<String>,

    /// HTTP methods that should not be exposed
    pub forbidden_methods: Vec<String>,
}

impl Default for Payloads {
    fn default() -> Self {
        Self {
            xss_payloads: vec![
                "<script>alert(1)</script>".to_string(),
                "<img src=x onerror=alert(1)>".to_string(),
                "<svg/onload=alert(1)>".to_string(),
                "\"><script>alert(1)</script>".to_string(),
                "';alert(1);//".to_string(),
            ],
            sqli_payloads: vec![
                "'".to_string(),
                "\"".to_string(),
                "' OR '1'='1".to_string(),
                "\" OR \"1\"=\"1".to_string(),
                "' UNION SELECT NULL--".to_string(),
                "admin'--".to_string(),
            ],
            sql_error_patterns: vec![
                (r"SQL syntax.*MySQL".to_string(), "MySQL".to_string()),
                (r"Warning.*mysql_".to_string(), "MySQL".to_string()),
                (r"MySQL server version for the right syntax".to_string(), "MySQL".to_string()),
                (r"PostgreSQL.*ERROR".to_string(), "PostgreSQL".to_string()),
                (r"Warning.*\Wpg_".to_string(), "PostgreSQL".to_string()),
                (r"PG::SyntaxError:".to_string(), "PostgreSQL".to_string()),
                (r"Unclosed quotation mark after the character string".to_string(), "MSSQL".to_string()),
                (r"Driver.*SQL[\-\_\ ]*Server".to_string(), "MSSQL".to_string()),
                (r"ORA-\d{5}".to_string(), "Oracle".to_string()),
                (r"Warning.*\Woci_".to_string(), "Oracle".to_string()),
                (r"SQLite3?::|sqlite3\.OperationalError".to_string(), "SQLite".to_string()),
                (r"\[SQLITE_ERROR\]".to_string(), "SQLite".to_string()),
                (r"(?i)quoted string not properly terminated".to_string(), "Generic".to_string()),
                (r"(?i)you have an error in your sql syntax".to_string(), "Generic".to_string()),
            ],
            sqli_true_suffix: "' AND '1'='1".to_string(),
            sqli_false_suffix: "' AND '1'='2".to_string(),
            boolean_length_threshold: 50,
            redirect_param_names: vec![
                "redirect".to_string(),
                "url".to_string(),
                "next".to_string(),
                "return".to_string(),
                "goto".to_string(),
                "redir".to_string(),
                "continue".to_string(),
            ],
            redirect_canary: "https://evil.example.net".to_string(),
            required_headers: vec![
                "X-Frame-Options".to_string(),
                "X-XSS-Protection".to_string(),
                "Content-Security-Policy".to_string(),
                "Strict-Transport-Security".to_string(),
                "X-Content-Type-Options".to_string(),
            ],
            forbidden_methods: vec!["TRACE".to_string(), "TRACK".to_string()],
        }
    }
}

impl Payloads {
    /// Compile the SQL error signature table, dropping invalid patterns
    pub fn compiled_sql_patterns(&self) -> Vec<(regex::Regex, String)> {
        self.sql_error_patterns
            .iter()
            .filter_map(|(pattern, db)| {
                match regex::Regex::new(pattern) {
                    Ok(re) => Some((re, db.clone())),
                    Err(e) => {
                        tracing::warn!(pattern, error = %e, "Skipping invalid SQL error pattern");
                        None
                    }
                }
            })
            .collect()
    }

    /// Whether a parameter name matches the redirect-parameter heuristic
    pub fn is_redirect_param_name(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.redirect_param_names.iter().any(|p| *p == lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lists_are_nonempty() {
        let payloads = Payloads::default();
        assert!(!payloads.xss_payloads.is_empty());
        assert!(!payloads.sqli_payloads.is_empty());
        assert!(!payloads.required_headers.is_empty());
        assert!(!payloads.forbidden_methods.is_empty());
    }

    #[test]
    fn all_default_sql_patterns_compile() {
        let payloads = Payloads::default();
        assert_eq!(
            payloads.compiled_sql_patterns().len(),
            payloads.sql_error_patterns.len()
        );
    }

    #[test]
    fn default_required_headers_cover_the_recommended_set() {
        let payloads = Payloads::default();
        for header in [
            "X-Frame-Options",
            "X-XSS-Protection",
            "Content-Security-Policy",
            "Strict-Transport-Security",
            "X-Content-Type-Options",
        ] {
            assert!(
                payloads.required_headers.iter().any(|h| h == header),
                "missing default header: {}",
                header
            );
        }
        assert_eq!(payloads.required_headers.len(), 5);
    }

    #[test]
    fn redirect_name_heuristic_is_case_insensitive() {
        let payloads = Payloads::default();
        assert!(payloads.is_redirect_param_name("next"));
        assert!(payloads.is_redirect_param_name("Redirect"));
        assert!(!payloads.is_redirect_param_name("id"));
    }

    #[test]
    fn canary_is_an_absolute_external_url() {
        let payloads = Payloads::default();
        let url = url::Url::parse(&payloads.redirect_canary).unwrap();
        assert!(url.host_str().is_some());
    }
}
