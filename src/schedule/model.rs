use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt::Display;

/// Days covered by the "always available" window of an exhibition.
pub const WIDE_OPEN_DAYS: u32 = 365;

/// What an empty or unparseable schedule turns into.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ParsePolicy {
    /// Events: nothing parseable means no dates.
    Ordinary,
    /// Exhibitions: nothing parseable means available for the next year.
    WideOpen,
}

/// How a `till D/M` segment behaves when D/M already passed this year.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TillRollover {
    #[default]
    SameYear,
    NextYear,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ScheduleDiagnostic {
    Malformed { segment: String },
    TillEndsBeforeToday { end: NaiveDate },
    EmptyRange { start: NaiveDate, end: NaiveDate },
}

impl Display for ScheduleDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleDiagnostic::Malformed { segment } => {
                write!(f, "malformed segment '{}'", segment)
            }
            ScheduleDiagnostic::TillEndsBeforeToday { end } => {
                write!(f, "'till' end {} is before today", end)
            }
            ScheduleDiagnostic::EmptyRange { start, end } => {
                write!(f, "range {} to {} ends before it starts", start, end)
            }
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ParsedSchedule {
    pub dates: BTreeSet<NaiveDate>,
    pub diagnostics: Vec<ScheduleDiagnostic>,
}

impl ParsedSchedule {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
