#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::seed::default_seed;
use crate::core::{ActivitySeed, ConfigProvider};
use crate::utils::error::{ActivityError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use toml_config::TomlConfig;

/// 合併 CLI 與 TOML 後的最終設定
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub log_format: LogFormat,
    pub verbose: bool,
    pub activities: Vec<ActivitySeed>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: "static".to_string(),
            log_format: LogFormat::Compact,
            verbose: false,
            activities: default_seed(),
        }
    }
}

impl ServerConfig {
    /// TOML 檔案中有設定的值覆蓋預設值
    pub fn merge_toml(mut self, file: TomlConfig) -> Self {
        if let Some(host) = file.server.host.clone() {
            self.host = host;
        }
        if let Some(port) = file.server.port {
            self.port = port;
        }
        if let Some(static_dir) = file.server.static_dir.clone() {
            self.static_dir = static_dir;
        }
        if let Some(logging) = &file.logging {
            if let Some(format) = logging.format {
                self.log_format = format;
            }
            if let Some(verbose) = logging.verbose {
                self.verbose = verbose;
            }
        }
        if let Some(seed) = file.seed_override() {
            self.activities = seed;
        }
        self
    }
}

#[cfg(feature = "cli")]
impl ServerConfig {
    /// 預設值 < --config 指定的 TOML 檔 < 命令列旗標
    pub fn load(cli: CliConfig) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => Self::default().merge_toml(TomlConfig::from_file(path)?),
            None => Self::default(),
        };
        Ok(config.apply_cli(cli))
    }

    /// 應用命令列覆蓋設定
    pub fn apply_cli(mut self, cli: CliConfig) -> Self {
        let CliConfig {
            host,
            port,
            static_dir,
            log_format,
            verbose,
            ..
        } = cli;

        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(static_dir) = static_dir {
            self.static_dir = static_dir;
        }
        if let Some(log_format) = log_format {
            self.log_format = log_format;
        }
        if verbose {
            self.verbose = true;
        }
        self
    }
}

impl ConfigProvider for ServerConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn static_dir(&self) -> &str {
        &self.static_dir
    }

    fn seed(&self) -> Vec<ActivitySeed> {
        self.activities.clone()
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        if self.port == 0 {
            return Err(ActivityError::ConfigValidationError {
                field: "server.port".to_string(),
                message: "Port must be between 1 and 65535".to_string(),
            });
        }
        validate_path("server.static_dir", &self.static_dir)?;
        Ok(())
    }
}
