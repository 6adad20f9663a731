use chrono::NaiveDate;
use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

/// Wildcard accepted by every facet.
pub const ALL_LABEL: &str = "all";

/// Pseudo-category selecting exhibitions.
pub const EXHIBITION_LABEL: &str = "展覽";

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn label(&self) -> &str {
        match self {
            Selection::All => ALL_LABEL,
            Selection::Only(label) => label,
        }
    }
}

impl From<&str> for Selection {
    fn from(label: &str) -> Self {
        if label == ALL_LABEL {
            Selection::All
        } else {
            Selection::Only(label.to_string())
        }
    }
}

impl FromStr for Selection {
    type Err = Infallible;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Ok(Selection::from(label))
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DateFilter {
    #[default]
    All,
    On(NaiveDate),
    /// Inclusive on both ends.
    Within { start: NaiveDate, end: NaiveDate },
}

/// What the visitor selected on the listing page.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FilterState {
    pub date: DateFilter,
    pub category: Selection,
    pub area: Selection,
    pub search_text: String,
}

impl FilterState {
    pub fn on(mut self, date: DateFilter) -> Self {
        self.date = date;
        self
    }

    pub fn in_category(mut self, category: impl Into<Selection>) -> Self {
        self.category = category.into();
        self
    }

    pub fn in_area(mut self, area: impl Into<Selection>) -> Self {
        self.area = area.into();
        self
    }

    pub fn searching(mut self, search_text: &str) -> Self {
        self.search_text = search_text.to_string();
        self
    }
}
