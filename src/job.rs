//! Job application records and the status pipeline.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown application status: {0}")]
pub struct ParseStatusError(pub String);

/// Pipeline stage of an application. Declaration order is board column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interviewing,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "applied",
            JobStatus::Interviewing => "interviewing",
            JobStatus::Offer => "offer",
            JobStatus::Rejected => "rejected",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interviewing => "Interviewing",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
        }
    }

    /// Statuses a card can be moved to: every status but its own.
    pub fn move_targets(&self) -> impl Iterator<Item = JobStatus> + '_ {
        Self::ALL.into_iter().filter(move |s| s != self)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// A stored application, owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub application_date: NaiveDate,
    pub job_link: Option<String>,
    pub status: JobStatus,
    pub notes: Option<String>,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Set whenever the record changes after creation.
    pub updated_at: Option<DateTime<Utc>>,
}

impl JobApplication {
    /// Turns a validated submission into a record.
    pub fn from_new(new: NewJobApplication, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            company: new.company.trim().to_string(),
            role: new.role.trim().to_string(),
            application_date: new.application_date,
            job_link: new.job_link,
            status: new.status,
            notes: new.notes,
            resume_url: new.resume_url,
            created_at,
            updated_at: None,
        }
    }
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    (!value.trim().is_empty()).then_some(value)
}

/// An application as entered in the "add application" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJobApplication {
    pub company: String,
    pub role: String,
    pub application_date: NaiveDate,
    pub job_link: Option<String>,
    pub status: JobStatus,
    pub notes: Option<String>,
    pub resume_url: Option<String>,
}

impl NewJobApplication {
    /// Starts a submission dated today with status `applied`.
    pub fn new(company: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            role: role.into(),
            application_date: Local::now().date_naive(),
            job_link: None,
            status: JobStatus::default(),
            notes: None,
            resume_url: None,
        }
    }

    pub fn application_date(mut self, date: NaiveDate) -> Self {
        self.application_date = date;
        self
    }

    pub fn job_link(mut self, link: impl Into<String>) -> Self {
        self.job_link = non_empty(link);
        self
    }

    pub fn status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = non_empty(notes);
        self
    }

    pub fn resume_url(mut self, url: impl Into<String>) -> Self {
        self.resume_url = non_empty(url);
        self
    }

    /// Company and role are mandatory.
    pub fn validate(&self) -> Result<(), JobError> {
        if self.company.trim().is_empty() {
            return Err(JobError::MissingField("Company"));
        }
        if self.role.trim().is_empty() {
            return Err(JobError::MissingField("Role"));
        }
        Ok(())
    }
}
