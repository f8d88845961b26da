pub mod commands;
pub mod output;
pub mod utils;

use anyhow::{Context, Result};
use boil::{BoilError, TemplateStore};
use std::io;
use std::path::Path;

/// Exit code for insufficient input and any other failure
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when the output file exists and `--force` was not given
pub const EXIT_FILE_EXISTS: i32 = 2;
/// Exit code when no template matches the language or extension
pub const EXIT_UNKNOWN_TEMPLATE: i32 = 3;

/// Load templates from `source`, or the built-in plates when none is given
pub fn load_store(source: Option<&Path>) -> Result<TemplateStore> {
    match source {
        Some(path) => TemplateStore::load(path)
            .with_context(|| format!("Failed to load templates from {}", path.display())),
        None => TemplateStore::builtin().context("Failed to load built-in templates"),
    }
}

/// Map an error to the process exit code
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(boil_err) = err.downcast_ref::<BoilError>() {
        if boil_err.is_not_found() {
            return EXIT_UNKNOWN_TEMPLATE;
        }
        return EXIT_FAILURE;
    }
    if let Some(io_err) = err.downcast_ref::<io::Error>() {
        if io_err.kind() == io::ErrorKind::AlreadyExists {
            return EXIT_FILE_EXISTS;
        }
    }
    EXIT_FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let insufficient = anyhow::Error::new(BoilError::InsufficientInput);
        assert_eq!(exit_code(&insufficient), EXIT_FAILURE);

        let unknown = anyhow::Error::new(BoilError::not_found(Some("asdf"), None));
        assert_eq!(exit_code(&unknown), EXIT_UNKNOWN_TEMPLATE);

        let exists = anyhow::Error::new(io::Error::from(io::ErrorKind::AlreadyExists))
            .context("File cannot be written because it already exists");
        assert_eq!(exit_code(&exists), EXIT_FILE_EXISTS);

        assert_eq!(exit_code(&anyhow::anyhow!("other")), EXIT_FAILURE);
    }

    #[test]
    fn test_load_store_defaults_to_builtin() {
        let store = load_store(None).unwrap();
        assert!(store.list_languages().contains(&"java".to_string()));
    }

    #[test]
    fn test_load_store_missing_path() {
        let err = load_store(Some(Path::new("/definitely/not/here"))).unwrap_err();
        assert!(matches!(err.downcast_ref::<BoilError>(), Some(BoilError::Load(_))));
    }
}
