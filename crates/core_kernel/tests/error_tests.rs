//! Unit tests for the core error types

use core_kernel::{CoreError, PortError};

mod core_error_tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = CoreError::validation("zip code is blank");
        assert_eq!(error.to_string(), "Validation error: zip code is blank");
    }

    #[test]
    fn test_not_found_error_display() {
        let error = CoreError::not_found("partner PRT-123");
        assert_eq!(error.to_string(), "Not found: partner PRT-123");
    }

    #[test]
    fn test_configuration_error_display() {
        let error = CoreError::configuration("missing lookup base URL");
        assert_eq!(
            error.to_string(),
            "Configuration error: missing lookup base URL"
        );
    }
}

mod port_error_tests {
    use super::*;

    #[test]
    fn test_not_found_carries_entity_and_id() {
        let error = PortError::not_found("Partner", "PRT-42");
        let message = error.to_string();
        assert!(message.contains("Partner"));
        assert!(message.contains("PRT-42"));
    }

    #[test]
    fn test_validation_field_variant() {
        let error = PortError::validation_field("must not be blank", "phone");
        match error {
            PortError::Validation { message, field } => {
                assert_eq!(message, "must not be blank");
                assert_eq!(field.as_deref(), Some("phone"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_transient_classification() {
        assert!(PortError::connection("refused").is_transient());
        assert!(PortError::ServiceUnavailable {
            service: "viacep".to_string()
        }
        .is_transient());
        assert!(!PortError::conflict("duplicate").is_transient());
        assert!(!PortError::not_found("Partner", "x").is_transient());
    }

    #[test]
    fn test_conflict_classification() {
        assert!(PortError::conflict("email already registered").is_conflict());
        assert!(!PortError::validation("bad input").is_conflict());
    }
}
