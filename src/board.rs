//! Kanban board: applications grouped into status columns, plus the counts
//! shown in the stats header.

use crate::job::{JobApplication, JobStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub status: JobStatus,
    pub applications: Vec<JobApplication>,
}

impl Column {
    pub fn title(&self) -> &'static str {
        self.status.title()
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }
}

/// One column per status, in [`JobStatus::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: [Column; 4],
}

impl Board {
    /// Partitions `applications` by status, keeping their relative order.
    pub fn from_applications<I>(applications: I) -> Self
    where
        I: IntoIterator<Item = JobApplication>,
    {
        let mut columns = JobStatus::ALL.map(|status| Column {
            status,
            applications: Vec::new(),
        });
        for app in applications {
            columns[column_index(app.status)].applications.push(app);
        }
        Self { columns }
    }

    pub fn column(&self, status: JobStatus) -> &Column {
        &self.columns[column_index(status)]
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts {
            total: self.columns.iter().map(Column::len).sum(),
            applied: self.column(JobStatus::Applied).len(),
            interviewing: self.column(JobStatus::Interviewing).len(),
            offer: self.column(JobStatus::Offer).len(),
            rejected: self.column(JobStatus::Rejected).len(),
        }
    }
}

fn column_index(status: JobStatus) -> usize {
    match status {
        JobStatus::Applied => 0,
        JobStatus::Interviewing => 1,
        JobStatus::Offer => 2,
        JobStatus::Rejected => 3,
    }
}

/// Aggregate counts for the stats header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub applied: usize,
    pub interviewing: usize,
    pub offer: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn from_applications(applications: &[JobApplication]) -> Self {
        applications.iter().fold(Self::default(), |mut counts, app| {
            counts.total += 1;
            match app.status {
                JobStatus::Applied => counts.applied += 1,
                JobStatus::Interviewing => counts.interviewing += 1,
                JobStatus::Offer => counts.offer += 1,
                JobStatus::Rejected => counts.rejected += 1,
            }
            counts
        })
    }

    pub fn get(&self, status: JobStatus) -> usize {
        match status {
            JobStatus::Applied => self.applied,
            JobStatus::Interviewing => self.interviewing,
            JobStatus::Offer => self.offer,
            JobStatus::Rejected => self.rejected,
        }
    }
}
