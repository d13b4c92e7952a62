//! Task records as delivered by the task API, plus list helpers.
//!
//! A [`Task`] is a read-only view of one task. It deserializes leniently:
//! missing or `null` fields fall back to empty values so a sparse payload still
//! renders, and fields the cards do not use (`list_name`, `reminder_time`,
//! `creation_date`, ...) are ignored.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use taskcard::libs::task::{filter_tasks, TaskFilter, TaskList};
//!
//! let json = r#"{"tasks": [
//!     {"id": 1, "task_name": "Pay rent", "due_date": "2024-01-01"},
//!     {"id": 2, "task_name": "Water plants", "task_completed": true}
//! ]}"#;
//! let tasks = TaskList::from_json(json)?.into_inner();
//! let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
//!
//! let past_due = filter_tasks(&tasks, TaskFilter::PastDue, today);
//! assert_eq!(past_due.len(), 1);
//! # Ok::<(), serde_json::Error>(())
//! ```

use super::formatter::parse_due_date;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// Opaque task identifier. The API emits integers, imported tasks may carry strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl Default for TaskId {
    fn default() -> Self {
        TaskId::Text(String::new())
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(id) => write!(f, "{}", id),
            TaskId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        TaskId::Number(id)
    }
}

impl From<i32> for TaskId {
    fn from(id: i32) -> Self {
        TaskId::Number(id.into())
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        TaskId::Text(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        TaskId::Text(id)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    #[serde(deserialize_with = "null_as_default")]
    pub id: TaskId,
    #[serde(deserialize_with = "null_as_default")]
    pub task_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub task_completed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub important: bool,
    /// Raw due-date value as supplied; `None`, `""` and whitespace all mean no due date.
    pub due_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub overdue: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_description: Option<String>,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, task_name: &str) -> Self {
        Task {
            id: id.into(),
            task_name: task_name.to_string(),
            ..Task::default()
        }
    }

    /// Raw due-date value, or `None` when it is missing, empty or whitespace only.
    pub fn due_date_raw(&self) -> Option<&str> {
        self.due_date.as_deref().filter(|raw| !raw.trim().is_empty())
    }

    pub fn has_due_date(&self) -> bool {
        self.due_date_raw().is_some()
    }

    /// Overdue only counts for tasks that actually have a due date.
    pub fn is_overdue(&self) -> bool {
        self.overdue && self.has_due_date()
    }

    /// Parsed due date, or `None` when absent or unparseable.
    pub fn due_on(&self) -> Option<NaiveDate> {
        self.due_date_raw().and_then(|raw| parse_due_date(raw).ok())
    }

    /// Returns a copy with `overdue` recomputed against `today`.
    ///
    /// A task is overdue when it is not completed and its due date is strictly
    /// before `today`. Tasks without a due date are never overdue. When the due
    /// date cannot be parsed the supplied flag is kept.
    pub fn with_overdue_from(&self, today: NaiveDate) -> Task {
        let mut task = self.clone();
        if !self.has_due_date() {
            task.overdue = false;
        } else if let Some(due) = self.due_on() {
            task.overdue = !self.task_completed && due < today;
        }
        task
    }
}

/// Which tasks of a list to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TaskFilter {
    /// Tasks that are not completed.
    #[default]
    Active,
    /// Completed tasks only.
    Completed,
    /// Open tasks whose due date has passed.
    PastDue,
    /// Open tasks marked as important.
    Important,
    /// Every task.
    All,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        match self {
            TaskFilter::Active => !task.task_completed,
            TaskFilter::Completed => task.task_completed,
            TaskFilter::PastDue => {
                !task.task_completed && task.due_on().map_or(task.is_overdue(), |due| due < today)
            }
            TaskFilter::Important => task.important && !task.task_completed,
            TaskFilter::All => true,
        }
    }
}

/// Ordering applied to a task list before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaskSort {
    /// Earliest due date first, tasks without one last.
    DueDate,
    /// Important tasks first.
    Important,
}

/// Direction of a [`TaskSort`]. `Desc` reverses the whole ordering, so
/// undated tasks lead a descending due-date sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

pub fn filter_tasks(tasks: &[Task], filter: TaskFilter, today: NaiveDate) -> Vec<Task> {
    let filtered: Vec<Task> = tasks.iter().filter(|task| filter.matches(task, today)).cloned().collect();
    tracing::debug!(?filter, total = tasks.len(), kept = filtered.len(), "filtered tasks");
    filtered
}

/// Case-insensitive match on task name or description. An empty query keeps everything.
pub fn search_tasks(tasks: &[Task], query: &str) -> Vec<Task> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tasks.to_vec();
    }

    tasks
        .iter()
        .filter(|task| {
            task.task_name.to_lowercase().contains(&needle)
                || task
                    .task_description
                    .as_deref()
                    .is_some_and(|description| description.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Stable sort in either direction, so equal keys keep the order the API returned.
pub fn sort_tasks(tasks: &mut [Task], sort: TaskSort, order: SortOrder) {
    let directed = |ordering: Ordering| match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    };

    match sort {
        TaskSort::DueDate => tasks.sort_by(|a, b| {
            let (a, b) = (a.due_on(), b.due_on());
            directed((a.is_none(), a).cmp(&(b.is_none(), b)))
        }),
        TaskSort::Important => tasks.sort_by(|a, b| directed(b.important.cmp(&a.important))),
    }
}

/// Keys that mark a bare JSON object as a task rather than some other payload.
const TASK_FIELDS: [&str; 7] = [
    "id",
    "task_name",
    "task_completed",
    "important",
    "due_date",
    "overdue",
    "task_description",
];

/// Tasks read from JSON in any of the shapes the API and its callers use:
/// the `{"tasks": [...]}` envelope, a bare array, or a single task object.
///
/// The API's failure body (`{"error": "..."}`), an envelope whose `tasks` is
/// not an array, and objects carrying none of the task fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let tasks = match serde_json::from_str::<Value>(json)? {
            Value::Array(items) => serde_json::from_value(Value::Array(items))?,
            Value::Object(mut object) => {
                if let Some(error) = object.get("error") {
                    let reason = error.as_str().map(str::to_string).unwrap_or_else(|| error.to_string());
                    return Err(serde_json::Error::custom(format!("task API returned an error: {}", reason)));
                }
                match object.remove("tasks") {
                    Some(Value::Array(items)) => serde_json::from_value(Value::Array(items))?,
                    Some(other) => {
                        return Err(serde_json::Error::custom(format!("'tasks' must be an array, found {}", other)));
                    }
                    None if TASK_FIELDS.iter().any(|field| object.contains_key(*field)) => {
                        vec![serde_json::from_value(Value::Object(object))?]
                    }
                    None => return Err(serde_json::Error::custom("object has no task fields")),
                }
            }
            other => return Err(serde_json::Error::custom(format!("expected tasks, found {}", other))),
        };
        Ok(TaskList(tasks))
    }

    pub fn into_inner(self) -> Vec<Task> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
