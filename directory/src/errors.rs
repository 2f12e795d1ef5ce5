/// Error types for dataset loading, validation and value parsing
#[derive(Debug)]
pub enum DirectoryError {
    IoError(std::io::Error),
    SerdeJsonError(serde_json::Error),
    SerdeYamlError(serde_yaml_ng::Error),
    UnsupportedFormat(String),
    DuplicateId(String),
    InvalidRating(String, f64),
    UnknownValue {
        kind: &'static str,
        value: String,
        suggestion: Option<&'static str>,
    },
    RestaurantNotFound(String),
}

impl From<std::io::Error> for DirectoryError {
    fn from(err: std::io::Error) -> Self {
        DirectoryError::IoError(err)
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        DirectoryError::SerdeJsonError(err)
    }
}

impl From<serde_yaml_ng::Error> for DirectoryError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        DirectoryError::SerdeYamlError(err)
    }
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryError::IoError(err) => write!(f, "IO error: {}", err),
            DirectoryError::SerdeJsonError(err) => write!(f, "Serde JSON error: {}", err),
            DirectoryError::SerdeYamlError(err) => write!(f, "Serde YAML error: {}", err),
            DirectoryError::UnsupportedFormat(what) => {
                write!(f, "Unsupported format '{}'. Use '.json' or '.yaml'.", what)
            }
            DirectoryError::DuplicateId(id) => write!(f, "Duplicate restaurant id: {}", id),
            DirectoryError::InvalidRating(id, rating) => {
                write!(
                    f,
                    "Invalid rating for restaurant {}: expected 0.0-5.0, got {}",
                    id, rating
                )
            }
            DirectoryError::UnknownValue {
                kind,
                value,
                suggestion,
            } => {
                write!(f, "Unknown {} '{}'", kind, value)?;
                if let Some(suggestion) = suggestion {
                    write!(f, ", did you mean '{}'?", suggestion)?;
                }
                Ok(())
            }
            DirectoryError::RestaurantNotFound(id) => write!(f, "Restaurant not found: {}", id),
        }
    }
}

impl std::error::Error for DirectoryError {}
