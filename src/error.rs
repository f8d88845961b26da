use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoilError>;

#[derive(Error, Debug)]
pub enum BoilError {
    // Standard library errors with automatic conversion
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    // Lookup errors, kept apart so callers can branch on them
    #[error("Cannot generate boilerplate from info provided. An extension or language is required")]
    InsufficientInput,

    #[error("Unknown language or extension (language: {}, extension: {})",
        or_none(.language),
        or_none(.extension))]
    NotFound {
        language: Option<String>,
        extension: Option<String>,
    },

    // Template source errors
    #[error("Template load error: {0}")]
    Load(String),
}

fn or_none(key: &Option<String>) -> &str {
    key.as_deref().unwrap_or("none")
}

impl BoilError {
    /// Build a `NotFound` from the lookup arguments that failed to match
    pub fn not_found(language: Option<&str>, extension: Option<&str>) -> Self {
        BoilError::NotFound {
            language: language.map(str::to_string),
            extension: extension.map(str::to_string),
        }
    }

    pub fn is_insufficient_input(&self) -> bool {
        matches!(self, BoilError::InsufficientInput)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BoilError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_have_distinct_messages() {
        let insufficient = BoilError::InsufficientInput.to_string();
        let missing = BoilError::not_found(Some("asdf"), None).to_string();

        assert!(insufficient.contains("language is required"));
        assert!(missing.contains("Unknown language or extension"));
        assert!(missing.contains("asdf"));
        assert_ne!(insufficient, missing);
    }

    #[test]
    fn test_error_kind_predicates() {
        assert!(BoilError::InsufficientInput.is_insufficient_input());
        assert!(!BoilError::InsufficientInput.is_not_found());
        assert!(BoilError::not_found(None, Some(".zz")).is_not_found());
        assert!(!BoilError::Load("bad".into()).is_not_found());
    }

    #[test]
    fn test_io_errors_convert() {
        let err: BoilError = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert!(matches!(err, BoilError::Io(_)));
        assert!(!err.is_not_found());
    }
}
