//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use kolam::KolamError;
    use kolam::io::error::malformed_reply;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = KolamError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read"));
        assert!(message.contains("/tmp/test.png"));
    }

    // Tests the in-progress error reports how far the transition got
    // Verified by printing the raw factor
    #[test]
    fn test_generation_in_progress_message() {
        let error = KolamError::GenerationInProgress { progress: 0.42 };
        assert!(error.to_string().contains("42%"));
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = KolamError::InvalidParameter {
            parameter: "grid_size",
            value: "12".to_string(),
            reason: "must be between 5 and 9".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("grid_size"));
        assert!(message.contains("12"));
        assert!(message.contains("must be between 5 and 9"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = KolamError::ImageExport {
            path: PathBuf::from("/restricted/output.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(error.source().is_some());
        assert!(
            message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }

    // Tests service failures carry their reason without a source
    // Verified by dropping the reason from the message
    #[test]
    fn test_service_errors() {
        let error = malformed_reply(&"no JSON object in reply");
        assert!(matches!(error, KolamError::MalformedReply { .. }));
        assert!(error.to_string().contains("no JSON object"));

        let error = KolamError::RemoteService {
            reason: "timed out".to_string(),
        };
        assert!(error.to_string().contains("timed out"));
        assert!(error.source().is_none());
    }

    // Tests configuration errors name the file when there is one
    // Verified by always printing the path
    #[test]
    fn test_configuration_error() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid");
        let error = KolamError::Configuration {
            path: Some(PathBuf::from("thresholds.json")),
            source: parse_error,
        };
        assert!(error.to_string().contains("thresholds.json"));
        assert!(error.source().is_some());

        let parse_error = serde_json::from_str::<serde_json::Value>("[").expect_err("invalid");
        let error = KolamError::Configuration {
            path: None,
            source: parse_error,
        };
        assert!(error.to_string().starts_with("Invalid configuration:"));
    }

    // Tests report encoding failures are not reported as configuration problems
    // Verified by reusing the configuration message
    #[test]
    fn test_report_encoding_error() {
        let encode_error = serde_json::from_str::<serde_json::Value>("]").expect_err("invalid");
        let error = KolamError::ReportEncoding {
            path: PathBuf::from("scans/a.png"),
            source: encode_error,
        };
        let message = error.to_string();
        assert!(message.starts_with("Failed to encode report"));
        assert!(message.contains("scans/a.png"));
        assert!(!message.contains("configuration"));
        assert!(error.source().is_some());
    }

    // Tests io errors convert with a placeholder path
    // Verified by converting into ImageLoad
    #[test]
    fn test_from_io_error() {
        let error: KolamError = std::io::Error::other("boom").into();
        assert!(matches!(error, KolamError::FileSystem { operation: "unknown", .. }));
    }
}
