//! Unified internal error type.
//!
//! The enum is generated by a macro so every variant carries a stable code
//! and a human-readable type name.

use std::fmt;

/// Defines the error enum plus:
/// - `code()` - stable error code
/// - `error_type()` - error type name
/// - `message()` - error detail
/// - snake_case convenience constructors
macro_rules! define_tsmart_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum TsmartError {
            $($variant(String),)*
        }

        impl TsmartError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(TsmartError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TsmartError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(TsmartError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl TsmartError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TsmartError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_tsmart_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Conflict("E008", "Resource Conflict"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
    InvalidTransition("E013", "Invalid State Transition"),
}

impl TsmartError {
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TsmartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TsmartError {}

impl From<sea_orm::DbErr> for TsmartError {
    fn from(err: sea_orm::DbErr) -> Self {
        TsmartError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for TsmartError {
    fn from(err: std::io::Error) -> Self {
        TsmartError::DatabaseConnection(err.to_string())
    }
}

impl From<serde_json::Error> for TsmartError {
    fn from(err: serde_json::Error) -> Self {
        TsmartError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for TsmartError {
    fn from(err: chrono::ParseError) -> Self {
        TsmartError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TsmartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TsmartError::cache_connection("test").code(), "E001");
        assert_eq!(TsmartError::database_operation("test").code(), "E005");
        assert_eq!(TsmartError::validation("test").code(), "E006");
        assert_eq!(TsmartError::conflict("test").code(), "E008");
        assert_eq!(TsmartError::invalid_transition("test").code(), "E013");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            TsmartError::conflict("test").error_type(),
            "Resource Conflict"
        );
        assert_eq!(
            TsmartError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = TsmartError::validation("NISN must contain 10 digits");
        assert_eq!(err.message(), "NISN must contain 10 digits");
    }

    #[test]
    fn test_format_simple() {
        let err = TsmartError::not_found("billing 42");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("billing 42"));
    }
}
