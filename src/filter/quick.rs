use super::model::DateFilter;
use chrono::{Datelike, Days, NaiveDate};
use strum::EnumString;

/// Shortcut buttons above the listing.
#[derive(EnumString, Debug, Copy, Clone, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum QuickDate {
    All,
    Today,
    Weekend,
}

impl QuickDate {
    pub fn to_filter(self, today: NaiveDate) -> DateFilter {
        match self {
            QuickDate::All => DateFilter::All,
            QuickDate::Today => DateFilter::On(today),
            QuickDate::Weekend => {
                let (saturday, sunday) = coming_weekend(today);

                DateFilter::Within {
                    start: saturday,
                    end: sunday,
                }
            }
        }
    }
}

/// The Saturday of this week (today when it is Saturday) and the day after.
/// On a Sunday this is the next weekend.
pub fn coming_weekend(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let saturday = today + Days::new(6 - u64::from(today.weekday().num_days_from_sunday()));

    (saturday, saturday + Days::new(1))
}

/// From today until Sunday; a Sunday looks a whole week ahead.
pub fn week_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let days_until_sunday = match 6 - today.weekday().num_days_from_monday() {
        0 => 7,
        days => days,
    };

    (today, today + Days::new(u64::from(days_until_sunday)))
}
