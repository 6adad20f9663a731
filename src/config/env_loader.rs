use crate::catalog::sheets::SHEETS_BASE_URL;
use crate::config::model::{Config, FavoritesConfig, ScheduleConfig, SheetsConfig};
use crate::schedule::TillRollover;
use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set.")]
    Missing(&'static str),

    #[error("Invalid config '{name}'. Expected {expected}.")]
    Invalid {
        name: &'static str,
        expected: &'static str,
    },
}

pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(|name| env::var(name).ok())
}

pub fn load_config_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
    let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    let sheets_config = SheetsConfig {
        base_url: lookup("XPLORE_SHEETS_BASE_URL").unwrap_or_else(|| SHEETS_BASE_URL.to_string()),
        spreadsheet_id: load_required_config(&lookup, "XPLORE_SPREADSHEET_ID")?,
        api_key: load_required_config(&lookup, "XPLORE_SHEETS_API_KEY")?,
        max_retries: load_parsed_config(&lookup, "XPLORE_CATALOG_RETRIES", "a whole number")?
            .unwrap_or(0),
    };

    let schedule_config = ScheduleConfig {
        year_hint: load_parsed_config(&lookup, "XPLORE_YEAR_HINT", "a year")?,
        till_rollover: load_till_rollover_config(&lookup, "XPLORE_TILL_ROLLOVER")?,
    };

    let favorites_config = lookup("XPLORE_BACKEND_URL").map(|backend_url| FavoritesConfig {
        backend_url,
        token: lookup("XPLORE_TOKEN"),
    });

    Ok(Config {
        sheets_config,
        schedule_config,
        favorites_config,
    })
}

fn load_required_config(
    lookup: impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    lookup(name).ok_or(ConfigError::Missing(name))
}

fn load_parsed_config<T: FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, expected }),
        None => Ok(None),
    }
}

fn load_till_rollover_config(
    lookup: impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<TillRollover, ConfigError> {
    match lookup(name).as_deref().map(str::trim) {
        None | Some("same-year") => Ok(TillRollover::SameYear),
        Some("next-year") => Ok(TillRollover::NextYear),
        Some(_) => Err(ConfigError::Invalid {
            name,
            expected: "either 'same-year' or 'next-year'",
        }),
    }
}
