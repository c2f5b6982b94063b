//! Domain types for the timetable planner.
//!
//! Times, days, meetings and sections. Parsing types enforce their
//! invariants at construction, so code receiving them can trust their
//! validity. The geometric predicates on meetings and sections are total.

mod day;
mod meeting;
mod section;
mod time;

pub use day::{Day, InvalidDay};
pub use meeting::Meeting;
pub use section::Section;
pub use time::{HourWindow, InvalidWindow, TimeError, TimeOfDay};
