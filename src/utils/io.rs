// src/utils/io.rs
use std::path::PathBuf;

/// Get the application config directory (not created here)
pub fn get_app_config_dir() -> Option<PathBuf> {
    match directories::ProjectDirs::from("com", "rustpassgen", "rust_passgen") {
        Some(proj_dirs) => Some(proj_dirs.config_dir().to_path_buf()),
        None => {
            log::debug!("Could not determine config directory");
            None
        }
    }
}

/// Optional env file living in the config directory
pub fn get_config_env_file() -> Option<PathBuf> {
    get_app_config_dir()
        .map(|dir| dir.join("passgen.env"))
        .filter(|path| path.is_file())
}
