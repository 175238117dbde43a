use thiserror::Error;

/// Errors raised while mapping a JSON payload onto a metadata record
#[derive(Debug, Error, Eq, PartialEq)]
pub enum MetadataError {
    #[error("Malformed field {field}: expected {expected}")]
    MalformedField {
        /// Wire name of the offending key
        field: &'static str,
        /// Expected JSON type for that key
        expected: &'static str,
    },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl MetadataError {
    /// Wire name the error refers to, if it concerns a single field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            MetadataError::MalformedField { field, .. } => Some(field),
            MetadataError::MalformedPayload(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_wire_key() {
        let err = MetadataError::MalformedField {
            field: "frameRate",
            expected: "unsigned integer",
        };
        assert_eq!(
            err.to_string(),
            "Malformed field frameRate: expected unsigned integer"
        );
        assert_eq!(err.field(), Some("frameRate"));

        let err = MetadataError::MalformedPayload("expected a JSON object".to_string());
        assert_eq!(err.to_string(), "Malformed payload: expected a JSON object");
        assert_eq!(err.field(), None);
    }
}
