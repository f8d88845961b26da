use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Write generated text to `path`.
///
/// Without `force` an existing file is left untouched and the call fails
/// with [`io::ErrorKind::AlreadyExists`].
pub fn write_boilerplate(path: &Path, text: &str, force: bool) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path)?;
    file.write_all(text.as_bytes())?;
    debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Add the user-execute bit to `path`
#[cfg(unix)]
pub fn make_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = std::fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o100);
    std::fs::set_permissions(path, permissions)
}

#[cfg(not(unix))]
pub fn make_executable(path: &Path) -> io::Result<()> {
    tracing::warn!("Cannot mark {} executable on this platform", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("main.c");

        write_boilerplate(&path, "int main() {}\n", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "int main() {}\n");
    }

    #[test]
    fn test_existing_file_requires_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("main.c");
        fs::write(&path, "original contents that are longer").unwrap();

        let err = write_boilerplate(&path, "new", false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original contents that are longer");

        write_boilerplate(&path, "new", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_make_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("run.sh");
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        make_executable(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o744);
    }
}
