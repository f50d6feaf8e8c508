use std::env;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_GRID_SIZE: usize = 15;
/// Largest side the editor offers, in feet.
pub const DEFAULT_MAX_DIMENSION: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub default_rows: usize,
    pub default_cols: usize,
    pub max_dimension: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            default_rows: DEFAULT_GRID_SIZE,
            default_cols: DEFAULT_GRID_SIZE,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl AppConfig {
    /// Reads `TERRACE_*` variables, loading a `.env` file first when present.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::info!("loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let max_dimension = positive(&lookup, "TERRACE_MAX_DIMENSION", defaults.max_dimension);
        let mut config = Self {
            bind_addr: lookup("TERRACE_BIND_ADDR").unwrap_or(defaults.bind_addr),
            default_rows: positive(&lookup, "TERRACE_DEFAULT_ROWS", defaults.default_rows),
            default_cols: positive(&lookup, "TERRACE_DEFAULT_COLS", defaults.default_cols),
            max_dimension,
        };
        if config.default_rows > max_dimension || config.default_cols > max_dimension {
            log::warn!(
                "default terrace {}x{} exceeds TERRACE_MAX_DIMENSION={max_dimension}, clamping",
                config.default_rows,
                config.default_cols
            );
            config.default_rows = config.default_rows.min(max_dimension);
            config.default_cols = config.default_cols.min(max_dimension);
        }
        config
    }
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: usize) -> usize {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => value,
        _ => {
            log::warn!("ignoring {key}={raw:?}, using {default}");
            default
        }
    }
}
