use crate::dashboard::{DashboardOptions, PickerScope, Theme, ThemeName};
use crate::geography::{GeographySource, GeographySources, STATCAN_PROVINCES_URL};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
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

/// Top-level configuration for the scorecard.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub geography: GeographyConfig,
    pub dashboard: DashboardConfig,
    /// Optional CSV replacing the standard score table.
    pub scores_csv: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("SCORECARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let theme = match non_empty("SCORECARD_THEME") {
            Some(value) => value
                .parse::<ThemeName>()
                .map_err(|_| ConfigError::InvalidTheme { value })?,
            None => ThemeName::Light,
        };

        let picker_scope = match non_empty("SCORECARD_PICKER_SCOPE") {
            Some(value) => value
                .parse::<PickerScope>()
                .map_err(|_| ConfigError::InvalidPickerScope { value })?,
            None => PickerScope::All,
        };

        let primary_url = non_empty("SCORECARD_PRIMARY_GEO_URL")
            .unwrap_or_else(|| STATCAN_PROVINCES_URL.to_string());
        let fallback_path = non_empty("SCORECARD_FALLBACK_GEO_PATH").map(PathBuf::from);

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            geography: GeographyConfig {
                primary_url,
                fallback_path,
            },
            dashboard: DashboardConfig {
                theme,
                picker_scope,
            },
            scores_csv: non_empty("SCORECARD_SCORES_CSV").map(PathBuf::from),
        })
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where boundary shapes come from.
#[derive(Debug, Clone)]
pub struct GeographyConfig {
    pub primary_url: String,
    pub fallback_path: Option<PathBuf>,
}

impl GeographyConfig {
    pub fn sources(&self) -> GeographySources {
        GeographySources {
            primary: GeographySource::Remote(self.primary_url.clone()),
            fallback: self
                .fallback_path
                .clone()
                .map_or(GeographySource::Bundled, GeographySource::LocalFile),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub theme: ThemeName,
    pub picker_scope: PickerScope,
}

impl DashboardConfig {
    pub fn options(&self) -> DashboardOptions {
        DashboardOptions {
            theme: Theme::named(self.theme),
            picker_scope: self.picker_scope,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTheme { value: String },
    InvalidPickerScope { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTheme { value } => {
                write!(f, "SCORECARD_THEME must be light or dark, got '{value}'")
            }
            ConfigError::InvalidPickerScope { value } => {
                write!(
                    f,
                    "SCORECARD_PICKER_SCOPE must be all or provinces, got '{value}'"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
