//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod etl_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let etl_error = EtlError::from(reqwest_error);

        match etl_error {
            EtlError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let etl_error = EtlError::from(json_error);

        match etl_error {
            EtlError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let etl_error = EtlError::from(io_error);

        match etl_error {
            EtlError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_database_error_conversion() {
        let etl_error = EtlError::from(sqlx::Error::RowNotFound);

        match etl_error {
            EtlError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let etl_error = EtlError::from(toml_error);

        match etl_error {
            EtlError::ConfigFormat(_) => (),
            _ => panic!("Expected ConfigFormat error variant"),
        }
    }
}

#[cfg(test)]
mod error_display_tests {
    use super::*;

    #[test]
    fn test_unexpected_shape_display() {
        let error = EtlError::shape("/teams/1/roster", "missing field `roster`");
        assert_eq!(
            error.to_string(),
            "Unexpected response shape from /teams/1/roster: missing field `roster`"
        );
    }

    #[test]
    fn test_invalid_field_display() {
        let error = EtlError::invalid("height", "tall");
        assert_eq!(error.to_string(), "Invalid value for height: \"tall\"");
    }

    #[test]
    fn test_config_display() {
        let error = EtlError::config("table name must not be empty");
        assert_eq!(
            error.to_string(),
            "Configuration error: table name must not be empty"
        );
    }

    #[test]
    fn test_missing_foreign_key_display() {
        let error = EtlError::MissingForeignKey {
            entity: "player",
            id: "8478402".to_string(),
            parent: "team",
            parent_id: "22".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "player 8478402 references missing team 22"
        );
    }

    #[test]
    fn test_error_debug_format() {
        let error = EtlError::invalid("number", "9a");
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("InvalidField"));
        assert!(debug_str.contains("9a"));
    }
}
