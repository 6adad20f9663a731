pub mod model;
pub mod parser;

pub use model::{ParsePolicy, ParsedSchedule, ScheduleDiagnostic, TillRollover};
pub use parser::ScheduleParser;
