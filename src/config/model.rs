use crate::schedule::TillRollover;

#[derive(Debug)]
pub struct Config {
    pub sheets_config: SheetsConfig,
    pub schedule_config: ScheduleConfig,
    pub favorites_config: Option<FavoritesConfig>,
}

#[derive(Debug)]
pub struct SheetsConfig {
    pub base_url: String,
    pub spreadsheet_id: String,
    pub api_key: String,
    pub max_retries: u32,
}

#[derive(Debug)]
pub struct ScheduleConfig {
    /// `None` uses the current year.
    pub year_hint: Option<i32>,
    pub till_rollover: TillRollover,
}

#[derive(Debug)]
pub struct FavoritesConfig {
    pub backend_url: String,
    pub token: Option<String>,
}
