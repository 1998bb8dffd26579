use crate::UtilsError;
use std::path::Path;

/// Published file names are lowercased with every whitespace character
/// replaced by a dash, so they stay stable across hosts and URL-safe.
pub fn normalize_file_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

/// Base name of a path as UTF-8, directory components stripped.
pub fn file_name_of(path: &Path) -> Result<String, UtilsError> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .ok_or_else(|| UtilsError::PathError(path.display().to_string()))
}

/// The published layout mirrors a URL path, so joins are always POSIX-style.
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_normalize_file_name() {
        assert_eq!(normalize_file_name("App Setup 1.2.3.exe"), "app-setup-1.2.3.exe");
        assert_eq!(normalize_file_name("MyApp.AppImage"), "myapp.appimage");
        assert_eq!(normalize_file_name("already-normal.zip"), "already-normal.zip");
    }

    #[test]
    fn test_file_name_of_strips_directories() {
        let path = PathBuf::from("dist/out/App Setup.exe");
        assert_eq!(file_name_of(&path).unwrap(), "App Setup.exe");
    }

    #[test]
    fn test_file_name_of_rejects_bare_root() {
        assert!(file_name_of(&PathBuf::from("/")).is_err());
    }
}
