//! Course schedule lookup.
//!
//! A [`Student`] never talks to the network itself; it is handed a
//! [`ScheduleFetcher`]. Production code uses [`HttpScheduleFetcher`], tests
//! pass a closure.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;

use crate::config::ScheduleConfig;
use crate::err::Error;
use crate::models::Student;

/// The parts of a schedule service response a [`Student`] looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleResponse {
    pub ok: bool,
    pub status: u16,
    pub text: String,
}

impl ScheduleResponse {
    pub fn success<S: Into<String>>(text: S) -> Self {
        Self {
            ok: true,
            status: 200,
            text: text.into(),
        }
    }

    pub fn failure<S: Into<String>>(status: u16, text: S) -> Self {
        Self {
            ok: false,
            status,
            text: text.into(),
        }
    }
}

pub trait ScheduleFetcher {
    fn fetch(&self, student: &Student) -> Result<ScheduleResponse, Error>;
}

impl<F> ScheduleFetcher for F
where
    F: Fn(&Student) -> Result<ScheduleResponse, Error>,
{
    fn fetch(&self, student: &Student) -> Result<ScheduleResponse, Error> {
        self(student)
    }
}

/// Fetches schedules with `GET {base_url}/course-schedule/{last_name}/{first_name}`.
#[derive(Debug, Clone)]
pub struct HttpScheduleFetcher {
    client: Client,
    base_url: Url,
}

impl HttpScheduleFetcher {
    pub fn new(config: &ScheduleConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url).map_err(|err| Error::InvalidUrl {
            message: format!("`{}`: {}", config.base_url, err),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl {
                message: format!("`{}` cannot be used as a base url", config.base_url),
            });
        }
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn schedule_url(&self, student: &Student) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl {
                message: format!("`{}` cannot be used as a base url", self.base_url),
            })?
            .pop_if_empty()
            .extend(&["course-schedule", student.last_name(), student.first_name()]);
        Ok(url)
    }
}

impl ScheduleFetcher for HttpScheduleFetcher {
    fn fetch(&self, student: &Student) -> Result<ScheduleResponse, Error> {
        let url = self.schedule_url(student)?;
        log::debug!("Requesting course schedule from {}", url);
        let response = self.client.get(url).send()?;
        let status = response.status();
        let text = response.text()?;
        Ok(ScheduleResponse {
            ok: status.is_success(),
            status: status.as_u16(),
            text,
        })
    }
}
