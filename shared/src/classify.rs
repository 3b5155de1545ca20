//! Status classification for crops and tasks
//!
//! Pure date logic. Callers supply `today` so classification never reads a
//! clock and stays deterministic under test.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Crop, Task};

/// Harvest status derived from a crop's expected harvest date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CropStatus {
    Overdue,
    ReadySoon,
    Growing,
}

impl CropStatus {
    /// Human-readable badge label
    pub fn label(&self) -> &'static str {
        match self {
            CropStatus::Overdue => "Overdue",
            CropStatus::ReadySoon => "Ready Soon",
            CropStatus::Growing => "Growing",
        }
    }
}

/// Signed whole-day count from `today` to the expected harvest date.
/// Negative means the harvest date passed that many days ago.
pub fn days_until_harvest(crop: &Crop, today: NaiveDate) -> i64 {
    (crop.expected_harvest_date - today).num_days()
}

/// Classify a crop by its expected harvest date.
///
/// The seven-day boundary is inclusive: a harvest exactly seven days out is
/// already `ReadySoon`. The harvest day itself is still `ReadySoon`, not
/// `Overdue`; only strictly-past dates are overdue.
pub fn classify_crop(crop: &Crop, today: NaiveDate) -> CropStatus {
    if today > crop.expected_harvest_date {
        CropStatus::Overdue
    } else if days_until_harvest(crop, today) <= 7 {
        CropStatus::ReadySoon
    } else {
        CropStatus::Growing
    }
}

/// Scheduling status derived from a task's due date and completion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Completed,
    Overdue,
    DueToday,
    Upcoming,
}

/// Classify a task. Completion wins over any date comparison; an incomplete
/// task due today is `DueToday`, not `Overdue`.
pub fn classify_task(task: &Task, today: NaiveDate) -> TaskStatus {
    if task.completed {
        TaskStatus::Completed
    } else if task.due_date < today {
        TaskStatus::Overdue
    } else if task.due_date == today {
        TaskStatus::DueToday
    } else {
        TaskStatus::Upcoming
    }
}

/// Tasks partitioned into board columns
///
/// Grouping is exhaustive and exclusive: every task lands in exactly one
/// bucket.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskBoard {
    pub overdue: Vec<Task>,
    pub today: Vec<Task>,
    pub upcoming: Vec<Task>,
    pub completed: Vec<Task>,
}

impl TaskBoard {
    /// Partition `tasks` into board columns relative to `today`
    pub fn group(tasks: Vec<Task>, today: NaiveDate) -> Self {
        let mut board = TaskBoard::default();
        for task in tasks {
            match classify_task(&task, today) {
                TaskStatus::Overdue => board.overdue.push(task),
                TaskStatus::DueToday => board.today.push(task),
                TaskStatus::Upcoming => board.upcoming.push(task),
                TaskStatus::Completed => board.completed.push(task),
            }
        }
        board
    }

    /// Total number of tasks across all columns
    pub fn len(&self) -> usize {
        self.overdue.len() + self.today.len() + self.upcoming.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
