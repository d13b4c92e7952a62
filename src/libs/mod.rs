//! Core library modules for taskcard.
//!
//! - **Rendering**: task card view model and markup ([`card`])
//! - **Data**: task records, filters and list helpers ([`task`])
//! - **Dates**: due-date parsing and the injectable formatter ([`formatter`])
//! - **Infrastructure**: configuration, data directory, user messages
//!
//! ## Usage
//!
//! ```rust
//! use taskcard::libs::card::render_task_list;
//! use taskcard::libs::formatter::ChronoDateFormatter;
//! use taskcard::libs::task::TaskList;
//!
//! let tasks = TaskList::from_json(r#"[{"id": 1, "task_name": "Call the bank"}]"#)?.into_inner();
//! let html = render_task_list(&tasks, &ChronoDateFormatter::default())?;
//! assert!(html.contains("Call the bank"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod card;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod task;
