use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_ML_CSV: &str = "data/employee_ml_dataset_v3.csv";
pub const DEFAULT_ATTRITION_CSV: &str = "data/HR-Employee-Attrition.csv";
pub const DEFAULT_OUTPUT: &str = "data/predictions_output.json";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub data: DataConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            data: DataConfig::from_env(),
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Input and output locations for a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub ml_csv: PathBuf,
    /// `None` when the secondary table is disabled.
    pub attrition_csv: Option<PathBuf>,
    pub output: PathBuf,
}

impl DataConfig {
    fn from_env() -> Self {
        let ml_csv = env::var("PEOPLEIQ_ML_CSV").unwrap_or_else(|_| DEFAULT_ML_CSV.to_string());
        let attrition_csv = match env::var("PEOPLEIQ_ATTRITION_CSV") {
            Ok(value) if value.trim().is_empty() => None,
            Ok(value) => Some(PathBuf::from(value)),
            Err(_) => Some(PathBuf::from(DEFAULT_ATTRITION_CSV)),
        };
        let output = env::var("PEOPLEIQ_OUTPUT").unwrap_or_else(|_| DEFAULT_OUTPUT.to_string());

        Self {
            ml_csv: PathBuf::from(ml_csv),
            attrition_csv,
            output: PathBuf::from(output),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            ml_csv: PathBuf::from(DEFAULT_ML_CSV),
            attrition_csv: Some(PathBuf::from(DEFAULT_ATTRITION_CSV)),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "PEOPLEIQ_ML_CSV",
            "PEOPLEIQ_ATTRITION_CSV",
            "PEOPLEIQ_OUTPUT",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.data, DataConfig::default());
    }

    #[test]
    fn data_paths_follow_environment() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PEOPLEIQ_ML_CSV", "/srv/hr/features.csv");
        env::set_var("PEOPLEIQ_ATTRITION_CSV", "  ");
        env::set_var("PEOPLEIQ_OUTPUT", "/srv/hr/out.json");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.data.ml_csv, PathBuf::from("/srv/hr/features.csv"));
        assert_eq!(config.data.attrition_csv, None);
        assert_eq!(config.data.output, PathBuf::from("/srv/hr/out.json"));
    }

    #[test]
    fn rejects_non_numeric_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "http");
        let result = AppConfig::load();
        reset_env();
        assert!(matches!(result, Err(ConfigError::InvalidPort)));
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        env::set_var("APP_ENV", "prod");
        let config = AppConfig::load().expect("config loads");
        reset_env();
        assert_eq!(config.environment, AppEnvironment::Production);
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }
}
