//! Paths and JSON helpers for files under ~/.arcade/.
//!
//! Only configuration is read from here. Game sessions are never saved.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.arcade/ directory path, creating it if needed.
pub fn arcade_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".arcade");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.arcade/.
pub fn arcade_path(filename: &str) -> io::Result<PathBuf> {
    Ok(arcade_dir()?.join(filename))
}

/// Get ~/.arcade/logs/, creating it if needed.
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let dir = arcade_dir()?.join("logs");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load a JSON file, returning `T::default()` if it is missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed JSON file");
                T::default()
            }
        },
        Err(_) => T::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arcade_path_format() {
        let path = arcade_path("config.json").expect("arcade_path should succeed");
        assert!(path.to_string_lossy().ends_with(".arcade/config.json"));
    }

    #[test]
    fn test_load_missing_returns_default() {
        let path = std::env::temp_dir().join("arcade_nonexistent_test_file_12345.json");
        let val: Vec<String> = load_json_or_default(&path);
        assert!(val.is_empty());
    }

    #[test]
    fn test_load_malformed_returns_default() {
        let path = std::env::temp_dir().join("arcade_persistence_malformed_test.json");
        fs::write(&path, "{ not json").unwrap();

        let val: Vec<u32> = load_json_or_default(&path);
        assert!(val.is_empty());

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_valid_file() {
        let path = std::env::temp_dir().join("arcade_persistence_valid_test.json");
        fs::write(&path, r#"["hello", "world"]"#).unwrap();

        let val: Vec<String> = load_json_or_default(&path);
        assert_eq!(val, vec!["hello".to_string(), "world".to_string()]);

        fs::remove_file(path).ok();
    }
}
