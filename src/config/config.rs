use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use home_dir::HomeDirExt;

use crate::types::Browser;

use super::app_config::AppConfig;

const DEFAULT_PUBLIC_OUTPUT: &str = "watch_later_public.csv";
const DEFAULT_PRIVATE_OUTPUT: &str = "watch_later_private.csv";

pub struct Config {
    app_config: AppConfig,
}

impl Config {
    pub fn new_from_file(config_path: Option<String>) -> Result<Config> {
        if let Some(config_path) = config_path {
            Config::new(PathBuf::from(config_path))
        } else {
            Config::new_default()
        }
    }

    pub fn new_default() -> Result<Config> {
        let config_directory_root =
            std::env::var("XDG_CONFIG_HOME").unwrap_or("~/.config".to_string());

        let config_file = expand(&config_directory_root)?
            .join("wl-export")
            .join("config.toml");

        Config::new(config_file)
    }

    fn new(config_file: PathBuf) -> Result<Config> {
        ensure_dir(&PathBuf::from(config_file.parent().unwrap()))?;

        let app_config: AppConfig = {
            let file_content = ensure_file(
                &config_file,
                toml::to_string_pretty(&AppConfig::default()).unwrap(),
            )?;

            toml::from_str(&file_content)?
        };

        Ok(Config { app_config })
    }

    pub fn browser(&self) -> Option<Browser> {
        self.app_config.browser
    }

    /// Profile path configured for the given browser, with `~` expanded.
    pub fn profile_path(&self, browser: Browser) -> Result<Option<String>> {
        let configured = match browser {
            Browser::Firefox => self.app_config.firefox_profile_path.as_ref(),
            Browser::Chrome => self.app_config.chrome_profile_path.as_ref(),
        };

        match configured {
            Some(path) => Ok(Some(expand(path)?.display().to_string())),
            None => Ok(None),
        }
    }

    pub fn public_output(&self) -> PathBuf {
        self.output_path(&self.app_config.public_output, DEFAULT_PUBLIC_OUTPUT)
    }

    pub fn private_output(&self) -> PathBuf {
        self.output_path(&self.app_config.private_output, DEFAULT_PRIVATE_OUTPUT)
    }

    fn output_path(&self, configured: &Option<String>, default: &str) -> PathBuf {
        configured
            .as_ref()
            .and_then(|p| expand(p).ok())
            .unwrap_or_else(|| PathBuf::from(default))
    }
}

fn expand(path: &str) -> Result<PathBuf> {
    PathBuf::from(path)
        .expand_home()
        .map_err(|e| anyhow!("cannot expand \"{}\": {}", path, e))
}

fn ensure_dir(dir: &PathBuf) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    Ok(())
}

fn ensure_file(file_path: &PathBuf, default: String) -> Result<String> {
    if !file_path.exists() {
        let mut file = std::fs::File::create(file_path)?;
        file.write_all(default.as_bytes())?;
        Ok(default)
    } else {
        Ok(std::fs::read_to_string(file_path)?)
    }
}
