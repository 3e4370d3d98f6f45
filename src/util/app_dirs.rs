//! Where `dbl` keeps its configuration

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use directories::ProjectDirs;

const ORGANIZATION: &str = "debilinguify";
const APPLICATION: &str = "dbl";

/// Overrides the per-user config directory when set and non-empty
pub const CONFIG_DIR_ENV: &str = "DBL_CONFIG_DIR";

pub(crate) fn config_file(name: &str) -> Option<PathBuf> {
    resolve_config_dir(env::var_os(CONFIG_DIR_ENV)).map(|mut path| {
        path.push(name);
        path
    })
}

fn resolve_config_dir(dir_override: Option<OsString>) -> Option<PathBuf> {
    match dir_override {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => ProjectDirs::from("", ORGANIZATION, APPLICATION)
            .map(|pd| pd.config_dir().to_path_buf()),
    }
}
