use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dialin_core::error::CoreError;
use dialin_core::locale::{validate_locale_string, PhoneInfoStrings};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "dialin";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub records_path: Option<PathBuf>,
    pub strings: PhoneInfoStrings,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid locale string override: {0}")]
    InvalidLocaleString(#[from] CoreError),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    records_path: Option<PathBuf>,
    strings: Option<StringsFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StringsFile {
    modal_title: Option<String>,
    no_phone_available: Option<String>,
    dial_in_label: Option<String>,
    meeting_id_label: Option<String>,
    wait_label: Option<String>,
    toll_label: Option<String>,
    toll_free_label: Option<String>,
    toll_geo_template: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(records_path) = parsed.records_path {
        config.records_path = Some(records_path);
    }

    if let Some(strings) = parsed.strings {
        apply_override(&mut config.strings.modal_title, "modal_title", strings.modal_title)?;
        apply_override(
            &mut config.strings.no_phone_available,
            "no_phone_available",
            strings.no_phone_available,
        )?;
        apply_override(
            &mut config.strings.dial_in_label,
            "dial_in_label",
            strings.dial_in_label,
        )?;
        apply_override(
            &mut config.strings.meeting_id_label,
            "meeting_id_label",
            strings.meeting_id_label,
        )?;
        apply_override(&mut config.strings.wait_label, "wait_label", strings.wait_label)?;
        apply_override(&mut config.strings.toll_label, "toll_label", strings.toll_label)?;
        apply_override(
            &mut config.strings.toll_free_label,
            "toll_free_label",
            strings.toll_free_label,
        )?;
        apply_override(
            &mut config.strings.toll_geo_template,
            "toll_geo_template",
            strings.toll_geo_template,
        )?;
    }

    Ok(config)
}

fn apply_override(slot: &mut String, key: &str, value: Option<String>) -> Result<()> {
    if let Some(value) = value {
        validate_locale_string(key, &value)?;
        *slot = value;
    }
    Ok(())
}
