//! HTML card rendering for a single task.
//!
//! A card is built in two steps. [`TaskCard::new`] reads the task and computes
//! everything the markup depends on: icon classes, the name class and the
//! optional due-date line. [`TaskCard::markup`] then lays that out as HTML.
//! All interpolated values pass through maud, which escapes them, so task text
//! from untrusted sources cannot inject markup.
//!
//! ## Card Structure
//!
//! ```text
//! div.task-card [data-task-id, id="task-{id}"]
//! └── div.d-flex.justify-content-between.align-items-center
//!     ├── div.d-flex.align-items-center
//!     │   ├── i.custom-check [data-id]       far fa-circle | far fa-check-circle
//!     │   └── div
//!     │       ├── div.task-name              + strikethrough when completed
//!     │       └── div.task-due-date          only with a due date, " · Overdue" suffix
//!     └── i.mark-favorite [data-id]          far fa-star (+ text-primary when important)
//! ```
//!
//! The page script finds cards by `id="task-{id}"` and resolves icon clicks
//! through the `data-id` attributes.
//!
//! ## Examples
//!
//! ```rust
//! use taskcard::libs::card::render_task_card;
//! use taskcard::libs::formatter::ChronoDateFormatter;
//! use taskcard::libs::task::Task;
//!
//! let mut task = Task::new(7, "Buy milk");
//! task.important = true;
//! task.due_date = Some("2024-01-01".to_string());
//! task.overdue = true;
//!
//! let html = render_task_card(&task, &ChronoDateFormatter::default())?;
//! assert!(html.contains(r#"data-task-id="7""#));
//! assert!(html.contains("Jan 1, 2024 · Overdue"));
//! # Ok::<(), taskcard::libs::card::RenderError>(())
//! ```

use super::formatter::{DateError, DateFormatter};
use super::task::Task;
use maud::{html, Markup};
use thiserror::Error;

pub const CHECK_ICON_CHECKED: &str = "far fa-check-circle";
pub const CHECK_ICON_UNCHECKED: &str = "far fa-circle";
pub const FAVORITE_ICON_HIGHLIGHTED: &str = "far fa-star text-primary";
pub const FAVORITE_ICON_PLAIN: &str = "far fa-star";
pub const STRIKETHROUGH_CLASS: &str = "strikethrough";
pub const OVERDUE_SUFFIX: &str = " · Overdue";

const NAME_CLASS: &str = "task-name";
const NAME_CLASS_COMPLETED: &str = "task-name strikethrough";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("failed to format due date: {0}")]
    Date(#[from] DateError),
}

/// View model for one task card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    pub id: String,
    pub name: String,
    pub name_class: &'static str,
    pub check_icon: &'static str,
    pub favorite_icon: &'static str,
    /// Formatted due date plus overdue suffix; `None` hides the line.
    pub due_line: Option<String>,
}

impl TaskCard {
    /// Computes the card for `task`.
    ///
    /// The formatter is only consulted when the task has a due date, and any
    /// error it returns is passed straight back to the caller. A formatter
    /// that yields empty text hides the due-date line, as a missing date does.
    pub fn new<F>(task: &Task, formatter: &F) -> Result<Self, RenderError>
    where
        F: DateFormatter + ?Sized,
    {
        let due_text = match task.due_date_raw() {
            Some(raw) => formatter.format_date(raw)?,
            None => String::new(),
        };

        let due_line = match (due_text.is_empty(), task.is_overdue()) {
            (true, _) => None,
            (false, true) => Some(format!("{}{}", due_text, OVERDUE_SUFFIX)),
            (false, false) => Some(due_text),
        };

        Ok(TaskCard {
            id: task.id.to_string(),
            name: task.task_name.clone(),
            name_class: if task.task_completed { NAME_CLASS_COMPLETED } else { NAME_CLASS },
            check_icon: if task.task_completed { CHECK_ICON_CHECKED } else { CHECK_ICON_UNCHECKED },
            favorite_icon: if task.important { FAVORITE_ICON_HIGHLIGHTED } else { FAVORITE_ICON_PLAIN },
            due_line,
        })
    }

    pub fn markup(&self) -> Markup {
        html! {
            div class="task-card" data-task-id=(self.id) id={ "task-" (self.id) } {
                div class="d-flex justify-content-between align-items-center" {
                    div class="d-flex align-items-center" {
                        i class={ (self.check_icon) " custom-check" } data-id=(self.id) {}
                        div {
                            div class=(self.name_class) { (self.name) }
                            @if let Some(due_line) = &self.due_line {
                                div class="task-due-date" { (due_line) }
                            }
                        }
                    }
                    i class={ (self.favorite_icon) " mark-favorite" } data-id=(self.id) {}
                }
            }
        }
    }
}

/// Renders one task as an HTML card.
///
/// Pure: the task is only read, nothing is cached, and the same input always
/// produces the same string.
pub fn render_task_card<F>(task: &Task, formatter: &F) -> Result<String, RenderError>
where
    F: DateFormatter + ?Sized,
{
    Ok(TaskCard::new(task, formatter)?.markup().into_string())
}

/// Renders tasks in order, one card per line. The first failing card aborts the list.
pub fn render_task_list<F>(tasks: &[Task], formatter: &F) -> Result<String, RenderError>
where
    F: DateFormatter + ?Sized,
{
    let cards = tasks
        .iter()
        .map(|task| render_task_card(task, formatter))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = cards.len(), "rendered task cards");
    Ok(cards.join("\n"))
}
