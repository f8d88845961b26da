use std::path::Path;

/// Split an output path into the default artifact name and lookup extension.
///
/// `src/Widget.java` gives `("Widget", ".java")`; only the last extension
/// counts, and dot-files have no extension.
pub fn split_target(path: &Path) -> (Option<String>, Option<String>) {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string);
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext));

    (name, extension)
}

/// Render a list as `'a', 'b', 'c'`
pub fn pretty_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("'{}'", item))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        format!("1 {}", word)
    } else {
        format!("{} {}s", count, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_split_target() {
        let (name, ext) = split_target(&PathBuf::from("src/Widget.java"));
        assert_eq!(name.as_deref(), Some("Widget"));
        assert_eq!(ext.as_deref(), Some(".java"));
    }

    #[test]
    fn test_split_target_last_extension_only() {
        let (name, ext) = split_target(&PathBuf::from("archive.tar.gz"));
        assert_eq!(name.as_deref(), Some("archive.tar"));
        assert_eq!(ext.as_deref(), Some(".gz"));
    }

    #[test]
    fn test_split_target_without_extension() {
        let (name, ext) = split_target(&PathBuf::from(".bashrc"));
        assert_eq!(name.as_deref(), Some(".bashrc"));
        assert_eq!(ext, None);

        let (name, ext) = split_target(&PathBuf::from("Makefile"));
        assert_eq!(name.as_deref(), Some("Makefile"));
        assert_eq!(ext, None);
    }

    #[test]
    fn test_pretty_list() {
        let items = vec!["c".to_string(), "java".to_string()];
        assert_eq!(pretty_list(&items), "'c', 'java'");
        assert_eq!(pretty_list(&[]), "");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("language", 1), "1 language");
        assert_eq!(pluralize("language", 3), "3 languages");
    }
}
