use super::model::{ParsePolicy, ParsedSchedule, ScheduleDiagnostic, TillRollover, WIDE_OPEN_DAYS};
use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use tracing::{trace, warn};

lazy_static! {
    static ref TILL: Regex = Regex::new(r"(?i)^till\s+(.+)$").unwrap();
    static ref DAY_MONTH: Regex = Regex::new(r"^(\d{1,2})\s*/\s*(\d{1,2})$").unwrap();
    static ref DAY_ONLY: Regex = Regex::new(r"^(\d{1,2})$").unwrap();
}

/// Turns the free-text schedules of the spreadsheet ("till 9/11", "1/12-3/12",
/// "16/11, 20/11") into calendar dates.
///
/// Day/month pairs carry no year, so every date lands in `year_hint`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ScheduleParser {
    pub year_hint: i32,
    pub till_rollover: TillRollover,
}

impl ScheduleParser {
    pub fn new(year_hint: i32, till_rollover: TillRollover) -> Self {
        Self {
            year_hint,
            till_rollover,
        }
    }

    pub fn for_year(year_hint: i32) -> Self {
        Self::new(year_hint, TillRollover::default())
    }

    pub fn dates(
        &self,
        schedule_text: &str,
        today: NaiveDate,
        policy: ParsePolicy,
    ) -> BTreeSet<NaiveDate> {
        self.parse(schedule_text, today, policy).dates
    }

    pub fn parse(
        &self,
        schedule_text: &str,
        today: NaiveDate,
        policy: ParsePolicy,
    ) -> ParsedSchedule {
        let text = schedule_text.trim();

        if text.is_empty() {
            return ParsedSchedule {
                dates: Self::fallback(today, policy),
                diagnostics: Vec::new(),
            };
        }

        let mut parsed = ParsedSchedule::default();

        for segment in text.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if let Err(diagnostic) = self.parse_segment(segment, today, &mut parsed) {
                warn!("Could not parse schedule '{}': {}", text, diagnostic);

                parsed.diagnostics.push(diagnostic);
                parsed.dates = Self::fallback(today, policy);

                return parsed;
            }
        }

        for diagnostic in &parsed.diagnostics {
            trace!("Schedule '{}': {}", text, diagnostic);
        }

        parsed
    }

    fn parse_segment(
        &self,
        segment: &str,
        today: NaiveDate,
        parsed: &mut ParsedSchedule,
    ) -> Result<(), ScheduleDiagnostic> {
        let malformed = || ScheduleDiagnostic::Malformed {
            segment: segment.to_string(),
        };

        if let Some(captures) = TILL.captures(segment) {
            let end_text = captures[1].trim();
            let end = self
                .day_month(end_text, self.year_hint)
                .ok_or_else(malformed)?;

            let until = match self.till_rollover {
                _ if end >= today => Some(end),
                TillRollover::SameYear => None,
                TillRollover::NextYear => self.day_month(end_text, self.year_hint + 1),
            };

            match until {
                Some(until) => parsed.dates.extend(walk(today, until)),
                None => parsed
                    .diagnostics
                    .push(ScheduleDiagnostic::TillEndsBeforeToday { end }),
            }
        } else if segment.contains('-') {
            let bounds: Vec<&str> = segment.split('-').map(str::trim).collect();
            let (start_text, end_text) = match bounds[..] {
                [start, end] => (start, end),
                _ => return Err(malformed()),
            };

            let end = self.day_month(end_text, self.year_hint).ok_or_else(malformed)?;
            let start = self
                .day_month(start_text, self.year_hint)
                .or_else(|| {
                    let day = DAY_ONLY.captures(start_text)?[1].parse().ok()?;
                    NaiveDate::from_ymd_opt(self.year_hint, end.month(), day)
                })
                .ok_or_else(malformed)?;

            if end < start {
                parsed
                    .diagnostics
                    .push(ScheduleDiagnostic::EmptyRange { start, end });
            }

            parsed.dates.extend(walk(start, end));
        } else {
            let date = self.day_month(segment, self.year_hint).ok_or_else(malformed)?;

            parsed.dates.insert(date);
        }

        Ok(())
    }

    fn day_month(&self, text: &str, year: i32) -> Option<NaiveDate> {
        let captures = DAY_MONTH.captures(text)?;
        let day = captures[1].parse().ok()?;
        let month = captures[2].parse().ok()?;

        NaiveDate::from_ymd_opt(year, month, day)
    }

    fn fallback(today: NaiveDate, policy: ParsePolicy) -> BTreeSet<NaiveDate> {
        match policy {
            ParsePolicy::Ordinary => BTreeSet::new(),
            ParsePolicy::WideOpen => today.iter_days().take(WIDE_OPEN_DAYS as usize).collect(),
        }
    }
}

/// Every day from `start` through `end`, empty when `end` comes first.
fn walk(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}
