//! Location model: a place name as reported by the geocoding provider

use std::fmt;

use serde::Serialize;

/// Free-text place name, never empty
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Create a location, rejecting empty names
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        assert!(Location::new("").is_none());
    }

    #[test]
    fn test_name_kept_verbatim() {
        let location = Location::new("São Paulo").unwrap();
        assert_eq!(location.name(), "São Paulo");
        assert_eq!(location.to_string(), "São Paulo");
    }
}
