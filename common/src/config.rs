//! Client configuration and endpoint assembly
//!
//! The base address, fallback policy, and timeout are injected into the
//! client at construction. Nothing is read from ambient globals.

/// What the client does when a remote call fails.
///
/// `Strict` surfaces every failure to the caller and is the default.
/// `Degraded` substitutes canned catalog data so the UI always has
/// something to show; meant for demos and local development only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    #[default]
    Strict,
    Degraded,
}

/// Configuration for the analysis client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub fallback: FallbackPolicy,

    /// Per-request timeout. None leaves the transport default in place.
    pub timeout_ms: Option<u32>,
}

impl ClientConfig {
    /// Creates a strict-mode config. A trailing slash on the base URL is
    /// trimmed so endpoint assembly never doubles separators.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            fallback: FallbackPolicy::default(),
            timeout_ms: None,
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn upload_endpoint(&self) -> String {
        format!("{}/analyze/upload", self.base_url)
    }

    pub fn url_endpoint(&self) -> String {
        format!("{}/analyze/url", self.base_url)
    }

    /// Price lookup endpoint. The product name is a path segment and gets
    /// percent-encoded, so "Bell Pepper" becomes "Bell%20Pepper".
    pub fn price_endpoint(&self, product_name: &str) -> String {
        format!(
            "{}/price/{}",
            self.base_url,
            encode_path_segment(product_name)
        )
    }
}

/// Percent-encodes one URL path segment. Keeps RFC 3986 unreserved
/// characters, encodes every other byte (multi-byte UTF-8 included).
pub fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push('%');
                encoded.push_str(&format!("{:02X}", byte));
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_strict() {
        let config = ClientConfig::new("http://localhost:8000");
        assert_eq!(config.fallback, FallbackPolicy::Strict);
        assert_eq!(config.timeout_ms, None);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://localhost:8000/");
        assert_eq!(config.upload_endpoint(), "http://localhost:8000/analyze/upload");
    }

    #[test]
    fn test_endpoints() {
        let config = ClientConfig::new("https://api.vegvision.example");
        assert_eq!(
            config.url_endpoint(),
            "https://api.vegvision.example/analyze/url"
        );
        assert_eq!(
            config.price_endpoint("Tomato"),
            "https://api.vegvision.example/price/Tomato"
        );
    }

    #[test]
    fn test_price_endpoint_encodes_spaces() {
        let config = ClientConfig::new("http://localhost:8000");
        assert_eq!(
            config.price_endpoint("Bell Pepper"),
            "http://localhost:8000/price/Bell%20Pepper"
        );
    }

    #[test]
    fn test_encode_path_segment_reserved() {
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(encode_path_segment("50%"), "50%25");
        assert_eq!(encode_path_segment("plain-name_1.0~x"), "plain-name_1.0~x");
    }

    #[test]
    fn test_encode_path_segment_multibyte() {
        // each UTF-8 byte is encoded separately
        assert_eq!(encode_path_segment("₹"), "%E2%82%B9");
    }

    #[test]
    fn test_builder_flags() {
        let config = ClientConfig::new("http://localhost:8000")
            .with_fallback(FallbackPolicy::Degraded)
            .with_timeout_ms(10_000);
        assert_eq!(config.fallback, FallbackPolicy::Degraded);
        assert_eq!(config.timeout_ms, Some(10_000));
    }
}
