//! CLI-specific configuration for the terminal UI.
use std::env;
use std::path::PathBuf;

/// Terminal client configuration, read once at startup.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
    /// Pre-filled into the seed prompt; the player still confirms it.
    pub seed: Option<i64>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PARTY_LOG_PANEL_HEIGHT` - Battle log panel height in lines (default: 7, min: 3)
    /// - `PARTY_LOG_DIR` - Directory for log files (default: platform cache dir)
    /// - `PARTY_SEED` - Seed suggested at the seed prompt
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(height) = parse_var::<u16>(&lookup, "PARTY_LOG_PANEL_HEIGHT") {
            config.ui.log_panel_height = height.max(UiConfig::MIN_LOG_PANEL_HEIGHT);
        }
        config.log_dir = lookup("PARTY_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);
        config.seed = parse_var(&lookup, "PARTY_SEED");

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of the battle log panel in lines (including borders).
    pub log_panel_height: u16,
}

impl UiConfig {
    pub const MIN_LOG_PANEL_HEIGHT: u16 = 3;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_panel_height: 7,
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
