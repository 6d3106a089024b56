use std::path::PathBuf;

/// Environment variable naming the launch CSV.
pub const DATA_ENV_VAR: &str = "LAUNCH_DASH_DATA";
pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";
pub const DEFAULT_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DashConfig {
    pub data_path: PathBuf,
    pub window_title: String,
}

impl DashConfig {
    /// Resolve from the process arguments and environment.
    pub fn from_env() -> Self {
        Self::resolve(std::env::args().skip(1), std::env::var(DATA_ENV_VAR).ok())
    }

    /// First positional argument wins, then the environment value, then the default file.
    pub fn resolve(mut args: impl Iterator<Item = String>, env_path: Option<String>) -> Self {
        let data_path = args
            .find(|a| !a.starts_with('-'))
            .or(env_path.filter(|p| !p.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

        DashConfig {
            data_path: PathBuf::from(data_path),
            window_title: DEFAULT_TITLE.to_string(),
        }
    }
}
