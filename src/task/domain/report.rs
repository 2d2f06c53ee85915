//! Periodic task reports.

use super::{ParseReportPeriodError, Task, TaskStatus};
use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

/// Reporting window length, anchored at the report's end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportPeriod {
    /// The last day.
    Daily,
    /// The last seven days.
    Weekly,
    /// The last calendar month.
    Monthly,
    /// The last six calendar months.
    HalfYearly,
    /// The last twelve calendar months.
    Yearly,
}

impl ReportPeriod {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::HalfYearly => "half-yearly",
            Self::Yearly => "yearly",
        }
    }

    /// Returns the window start for a report ending at `end`.
    ///
    /// Month-based windows saturate at the representable minimum rather
    /// than failing on out-of-range dates.
    #[must_use]
    pub fn window_start(self, end: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Daily => end - Duration::days(1),
            Self::Weekly => end - Duration::days(7),
            Self::Monthly => end
                .checked_sub_months(Months::new(1))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            Self::HalfYearly => end
                .checked_sub_months(Months::new(6))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            Self::Yearly => end
                .checked_sub_months(Months::new(12))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        }
    }
}

impl TryFrom<&str> for ReportPeriod {
    type Error = ParseReportPeriodError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "half-yearly" => Ok(Self::HalfYearly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(ParseReportPeriodError(value.to_owned())),
        }
    }
}

/// Snapshot of task activity inside a reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskReport {
    period: ReportPeriod,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    total: usize,
    pending: usize,
    in_progress: usize,
    completed: usize,
    verified: usize,
    tasks: Vec<Task>,
}

impl TaskReport {
    /// Compiles a report over the tasks created inside the window ending
    /// at `end`.
    ///
    /// Tasks created outside the window are ignored, so callers may pass
    /// an unfiltered listing.
    #[must_use]
    pub fn compile(period: ReportPeriod, end: DateTime<Utc>, tasks: Vec<Task>) -> Self {
        let start = period.window_start(end);
        let mut tasks: Vec<Task> = tasks
            .into_iter()
            .filter(|task| task.created_at() >= start && task.created_at() <= end)
            .collect();
        tasks.sort_by_key(|task| (task.created_at(), task.id().into_inner()));

        let count = |status: TaskStatus| tasks.iter().filter(|t| t.status() == status).count();
        Self {
            period,
            start,
            end,
            total: tasks.len(),
            pending: count(TaskStatus::Pending),
            in_progress: count(TaskStatus::InProgress),
            completed: count(TaskStatus::Completed),
            verified: count(TaskStatus::Verified),
            tasks,
        }
    }

    /// Returns the reporting period.
    #[must_use]
    pub const fn period(&self) -> ReportPeriod {
        self.period
    }

    /// Returns the window start.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the window end.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns the number of tasks created inside the window.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the number of pending tasks.
    #[must_use]
    pub const fn pending(&self) -> usize {
        self.pending
    }

    /// Returns the number of in-progress tasks.
    #[must_use]
    pub const fn in_progress(&self) -> usize {
        self.in_progress
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Returns the number of verified tasks.
    #[must_use]
    pub const fn verified(&self) -> usize {
        self.verified
    }

    /// Returns the tasks inside the window, oldest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
