pub mod config;
pub mod err;
pub mod models;
pub mod schedule;

pub use crate::config::ScheduleConfig;
pub use crate::err::Error;
pub use crate::models::{Student, SCHEDULE_FAILURE};
pub use crate::schedule::{HttpScheduleFetcher, ScheduleFetcher, ScheduleResponse};
