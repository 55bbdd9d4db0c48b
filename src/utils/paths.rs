use anyhow::{Result, anyhow};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Overrides the default `~/.gopass` home directory.
pub const HOME_ENV_KEY: &str = "GOPASS_HOME";

pub fn get_gopass_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(HOME_ENV_KEY).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".gopass"))
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_gopass_dir()?.join("config.toml"))
}

/// Default location of the master phrase when none is given on the command line.
pub fn get_master_file_path() -> Result<PathBuf> {
    Ok(get_gopass_dir()?.join("master"))
}

pub fn get_domains_log_path() -> Result<PathBuf> {
    Ok(get_gopass_dir()?.join("domains.log"))
}

pub fn get_log_file_path() -> Result<PathBuf> {
    Ok(get_gopass_dir()?.join("gopass.log"))
}

pub fn ensure_directories_exist() -> Result<()> {
    let dir = get_gopass_dir()?;

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(())
}
