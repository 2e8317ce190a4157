// src/config/credential.rs
// DOCUMENTATION: Google Maps API credential

use std::fmt;

/// Opaque API key sent as the `key` query parameter
/// DOCUMENTATION: Read once at startup. `Debug` never prints the secret,
/// so `Config` can be logged safely.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("ApiKey(<unset>)")
        } else {
            f.write_str("ApiKey(<redacted>)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("TESTKEY");
        assert_eq!(format!("{:?}", key), "ApiKey(<redacted>)");
        assert_eq!(key.as_str(), "TESTKEY");
    }

    #[test]
    fn test_empty_key() {
        let key = ApiKey::default();
        assert!(key.is_empty());
        assert_eq!(format!("{:?}", key), "ApiKey(<unset>)");
    }
}
