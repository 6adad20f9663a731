//! Column positions of the events and exhibitions tabs.
//!
//! The spreadsheet is read by position, not by header name, so a change in the
//! sheet's layout only needs to touch this file.

pub const INCLUDE: usize = 0;
pub const COST: usize = 1;
pub const TITLE: usize = 2;
pub const CATEGORIES: usize = 3;
pub const URL: usize = 5;
pub const SCHEDULE: usize = 6;
pub const VENUE: usize = 10;
pub const PHOTO: usize = 11;
pub const AREAS: usize = 12;
pub const ID: usize = 13;

/// Rows need every column up to the schedule. Trailing empty cells are omitted
/// by the Sheets API, so the remaining columns may be missing.
pub const MIN_COLUMNS: usize = SCHEDULE + 1;

/// Value of the include column for rows that should be listed.
pub const INCLUDE_MARKER: &str = "Y";

pub const NOT_AVAILABLE: &str = "N/A";
pub const PHOTO_SIGIL: char = '@';
pub const LIST_SEPARATOR: char = ',';
