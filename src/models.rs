use chrono::{DateTime, Duration, Utc};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::err::Error;
use crate::schedule::ScheduleFetcher;

pub const EMAIL_DOMAIN: &str = "email.com";
pub const DEFAULT_COURSE_LENGTH_DAYS: i64 = 365;
pub const SCHEDULE_FAILURE: &str = "Something went wrong!";

/// One enrolled learner.
///
/// `full_name` and `email` are derived from the name fields on every read.
/// `end_date` only moves forward and `naughty_list` only goes from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: Uuid,
    first_name: String,
    last_name: String,
    end_date: DateTime<Utc>,
    naughty_list: bool,
}

impl Student {
    /// Enrolls a student whose course ends [`DEFAULT_COURSE_LENGTH_DAYS`] from now.
    pub fn new<F: Into<String>, L: Into<String>>(first_name: F, last_name: L) -> Self {
        let end_date = Utc::now() + Duration::days(DEFAULT_COURSE_LENGTH_DAYS);
        Self::with_end_date(first_name, last_name, end_date)
    }

    pub fn with_end_date<F: Into<String>, L: Into<String>>(
        first_name: F,
        last_name: L,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            end_date,
            naughty_list: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn naughty_list(&self) -> bool {
        self.naughty_list
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email(&self) -> String {
        format!(
            "{}.{}@{}",
            self.first_name.to_lowercase(),
            self.last_name.to_lowercase(),
            EMAIL_DOMAIN
        )
    }

    pub fn alert_santa(&mut self) {
        if !self.naughty_list {
            log::info!("Student {} ({}) added to the naughty list", self.full_name(), self.id);
        }
        self.naughty_list = true;
    }

    /// Moves the course end date `days` calendar days later.
    ///
    /// On overflow the end date is left as it was.
    pub fn apply_extension(&mut self, days: u32) -> Result<(), Error> {
        let extended = self
            .end_date
            .checked_add_signed(Duration::days(i64::from(days)))
            .ok_or_else(|| Error::DateOutOfRange {
                message: format!(
                    "Extending {} by {} days overflows the calendar",
                    self.end_date, days
                ),
            })?;
        log::debug!("Extended {} from {} to {}", self.id, self.end_date, extended);
        self.end_date = extended;
        Ok(())
    }

    /// Fetches the schedule text, or [`SCHEDULE_FAILURE`] if the lookup fails in any way.
    pub fn course_schedule<F: ScheduleFetcher + ?Sized>(&self, fetcher: &F) -> String {
        match self.try_course_schedule(fetcher) {
            Ok(text) => text,
            Err(err) => {
                log::warn!(
                    "Course schedule for {} unavailable: {}",
                    self.full_name(),
                    err.message()
                );
                SCHEDULE_FAILURE.to_string()
            }
        }
    }

    pub fn try_course_schedule<F: ScheduleFetcher + ?Sized>(
        &self,
        fetcher: &F,
    ) -> Result<String, Error> {
        let response = fetcher.fetch(self)?;
        if response.ok {
            Ok(response.text)
        } else {
            Err(Error::Unsuccessful {
                status: response.status,
                message: response.text,
            })
        }
    }
}

impl Serialize for Student {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Student", 7)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("first_name", &self.first_name)?;
        state.serialize_field("last_name", &self.last_name)?;
        state.serialize_field("full_name", &self.full_name())?;
        state.serialize_field("email", &self.email())?;
        state.serialize_field("end_date", &self.end_date)?;
        state.serialize_field("naughty_list", &self.naughty_list)?;
        state.end()
    }
}
