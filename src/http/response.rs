//! HTTP probe response type

use std::collections::HashMap;

/// A received HTTP response
///
/// Any received response, non-2xx included, is a valid `ProbeResponse`;
/// transport failures surface as `ProbeError` instead.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    /// HTTP status code
    pub status: u16,

    /// Response headers
    pub headers: HashMap<String, String>,

    /// Response body
    pub body: Vec<u8>,

    /// Final URL after any followed redirects
    pub url: String,

    /// Response time in milliseconds
    pub duration_ms: u64,
}

impl ProbeResponse {
    /// Check if response is a redirect (3xx)
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }

    /// Get body as text
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get a specific header (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == name_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Body length in bytes
    pub fn body_len(&self) -> usize {
        self.body.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_header(name: &str, value: &str) -> ProbeResponse {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), value.to_string());
        ProbeResponse {
            status: 200,
            headers,
            body: Vec::new(),
            url: "http://example.com/".to_string(),
            duration_ms: 0,
        }
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let resp = response_with_header("Content-Security-Policy", "default-src 'self'");
        assert_eq!(resp.header("content-security-policy"), Some("default-src 'self'"));
        assert_eq!(resp.header("CONTENT-SECURITY-POLICY"), Some("default-src 'self'"));
        assert_eq!(resp.header("X-Frame-Options"), None);
    }

    #[test]
    fn redirect_covers_the_whole_3xx_class() {
        let mut resp = response_with_header("Location", "/login");
        for status in [301, 302, 307, 308] {
            resp.status = status;
            assert!(resp.is_redirect());
        }

        resp.status = 200;
        assert!(!resp.is_redirect());
        resp.status = 404;
        assert!(!resp.is_redirect());
    }
}
