use std::env;

use log::LevelFilter;
use simplelog::{CombinedLogger, ConfigBuilder, SharedLogger};

use crate::prelude::*;

pub const LOG_LEVEL_ENV: &str = "CODECOV_APPVEYOR_LOG";

fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|log_level| log_level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

pub fn get_local_logger() -> Box<dyn SharedLogger> {
    let log_level = parse_log_level(env::var(LOG_LEVEL_ENV).ok().as_deref());

    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Debug)
        .build();

    simplelog::TermLogger::new(
        log_level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
}

pub fn init_logger() -> Result<()> {
    CombinedLogger::init(vec![get_local_logger()]).context("Failed to init logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_log_level(Some("TRACE")), LevelFilter::Trace);
        assert_eq!(parse_log_level(Some("verbose")), LevelFilter::Info);
        assert_eq!(parse_log_level(None), LevelFilter::Info);
    }
}
