//! Domain error types.
//!
//! These errors represent validation failures when building domain values
//! from untyped input (query strings, configuration). They are distinct
//! from HTTP and repository errors.

/// Error returned when a string does not name a known enumeration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }

    /// The kind of value that failed to parse (e.g. "facility").
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = UnknownVariant::new("facility", "sauna");
        assert_eq!(err.to_string(), "unknown facility: \"sauna\"");
        assert_eq!(err.kind(), "facility");
        assert_eq!(err.value(), "sauna");
    }
}
