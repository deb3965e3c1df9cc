use std::path::{Path, PathBuf};

/// Database location constants
pub const DB_DATA_DIR: &str = "data";
pub const DB_FILE_NAME: &str = "intern_learning.db";
pub const RESOURCE_DIR: &str = "resources";

/// Whether the application runs in portable mode.
///
/// Portable mode is detected by the presence of `resources/data/intern_learning.db`
/// next to the executable.
pub fn is_portable_mode() -> bool {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return has_portable_layout(exe_dir);
        }
    }
    false
}

/// Checks whether `dir` contains the portable data layout.
pub fn has_portable_layout(dir: &Path) -> bool {
    let portable_data_dir = dir.join(RESOURCE_DIR).join(DB_DATA_DIR);
    let portable_db_file = portable_data_dir.join(DB_FILE_NAME);
    portable_data_dir.is_dir() && portable_db_file.is_file()
}

/// Base data directory: next to the executable in portable mode, the
/// platform data directory otherwise.
pub fn get_base_data_dir() -> Result<PathBuf, String> {
    get_base_data_dir_for_mode(is_portable_mode())
}

/// Base data directory for an explicitly chosen mode.
pub fn get_base_data_dir_for_mode(portable: bool) -> Result<PathBuf, String> {
    if portable {
        let exe_path =
            std::env::current_exe().map_err(|e| format!("cannot resolve executable path: {}", e))?;
        let exe_dir = exe_path
            .parent()
            .ok_or_else(|| "executable has no parent directory".to_string())?;
        Ok(exe_dir.join(RESOURCE_DIR))
    } else {
        get_system_data_dir()
    }
}

fn get_system_data_dir() -> Result<PathBuf, String> {
    use directories::BaseDirs;

    let base_dirs =
        BaseDirs::new().ok_or_else(|| "cannot determine the user's home directory".to_string())?;

    #[cfg(any(target_os = "windows", target_os = "macos"))]
    {
        Ok(base_dirs.data_dir().join("org.internlearning"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        Ok(base_dirs.data_dir().join("intern-learning"))
    }
}

/// Default database file path.
pub fn get_db_path() -> Result<PathBuf, String> {
    Ok(db_path_in(&get_base_data_dir()?))
}

/// Database file path under a given base directory.
pub fn db_path_in(base: &Path) -> PathBuf {
    base.join(DB_DATA_DIR).join(DB_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn db_path_is_nested_under_data_dir() {
        let path = db_path_in(Path::new("/srv/app"));
        assert_eq!(path, PathBuf::from("/srv/app/data/intern_learning.db"));
    }

    #[test]
    fn portable_layout_requires_the_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join(RESOURCE_DIR).join(DB_DATA_DIR);
        fs::create_dir_all(&data_dir).unwrap();
        assert!(!has_portable_layout(dir.path()));

        fs::write(data_dir.join(DB_FILE_NAME), b"").unwrap();
        assert!(has_portable_layout(dir.path()));
    }
}
