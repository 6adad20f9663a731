use chrono::NaiveDate;
use std::collections::BTreeSet;

pub const EVENTS_LABEL: &str = "搵活動";
pub const EXHIBITIONS_LABEL: &str = "睇展覽";

/// An event or exhibition as listed on the site.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Activity {
    pub id: Option<String>,
    pub title: String,
    pub schedule_text: String,
    pub occurrence_dates: BTreeSet<NaiveDate>,
    pub venue: String,
    pub cost: Option<String>,
    pub link_url: String,
    pub photo_ref: Option<String>,
    pub categories: Vec<String>,
    pub areas: Vec<String>,
    pub is_exhibition: bool,
}

impl Activity {
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.occurrence_dates.contains(&date)
    }

    pub fn occurs_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= end && self.occurrence_dates.range(start..=end).next().is_some()
    }
}

/// The two tabs of the spreadsheet.
#[derive(strum::IntoStaticStr, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CatalogKind {
    #[strum(serialize = "Event(new)")]
    Events,
    #[strum(serialize = "Exhibition(new)")]
    Exhibitions,
}

impl CatalogKind {
    pub fn sheet_name(&self) -> &'static str {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CatalogKind::Events => EVENTS_LABEL,
            CatalogKind::Exhibitions => EXHIBITIONS_LABEL,
        }
    }
}
