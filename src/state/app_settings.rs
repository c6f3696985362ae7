use log::LevelFilter;
use std::str::FromStr;

#[derive(Debug, Default, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
}

impl AppSettings {
    pub fn load() -> Self {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|v| parse_level(&v));
        Self { full_screen: false, log_level }
    }
}

/// Accepts a bare level name ("debug", "WARN", ...). Module filters are ignored.
fn parse_level(value: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(value.trim()).ok()
}
