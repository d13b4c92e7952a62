//! Renders task JSON as HTML task cards.
//!
//! Input is whatever the task API returns: the `{"tasks": [...]}` envelope, a
//! bare array or a single task object. The list is narrowed and ordered the
//! same way the API's list views do it, then each task becomes one card.
//!
//! Pipeline:
//!
//! 1. parse the JSON
//! 2. recompute overdue flags (only with `--derive-overdue` or the config switch)
//! 3. filter, search, sort
//! 4. render with the configured date format
//! 5. print to stdout or write to `--output`

use crate::{
    libs::{
        card::render_task_list,
        config::Config,
        formatter::ChronoDateFormatter,
        messages::Message,
        task::{filter_tasks, search_tasks, sort_tasks, SortOrder, TaskFilter, TaskList, TaskSort},
    },
    msg_debug, msg_error_anyhow, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// JSON file with tasks; `-` or nothing reads stdin
    pub input: Option<PathBuf>,

    /// Write the cards to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Which tasks to render
    #[arg(short, long, value_enum, default_value = "all")]
    pub filter: TaskFilter,

    /// Order of the rendered cards; input order when omitted
    #[arg(short, long, value_enum)]
    pub sort: Option<TaskSort>,

    /// Direction of `--sort`
    #[arg(long, value_enum, default_value = "asc")]
    pub order: SortOrder,

    /// Only tasks whose name or description contains this text
    #[arg(long)]
    pub search: Option<String>,

    /// chrono strftime pattern for due dates, overrides the config
    #[arg(long)]
    pub date_format: Option<String>,

    /// Date used for past-due checks (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub today: Option<String>,

    /// Recompute overdue flags from the due dates
    #[arg(long)]
    pub derive_overdue: bool,
}

pub fn cmd(args: RenderArgs) -> Result<()> {
    let config = Config::read()?;
    let json = read_input(args.input.as_deref())?;
    let html = render_json(&args, &config, &json)?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", html))
                .map_err(|_| msg_error_anyhow!(Message::OutputWriteFailed(path.display().to_string())))?;
            msg_success!(Message::OutputWritten(path.display().to_string()));
        }
        None => println!("{}", html),
    }

    Ok(())
}

/// Runs the render pipeline on a JSON document and returns the cards.
pub fn render_json(args: &RenderArgs, config: &Config, json: &str) -> Result<String> {
    let tasks = TaskList::from_json(json)
        .map_err(|e| msg_error_anyhow!(Message::InvalidTasksJson(e.to_string())))?
        .into_inner();
    msg_debug!(Message::TasksLoaded(tasks.len()));

    let today = resolve_today(args.today.as_deref())?;
    let tasks = if args.derive_overdue || config.derive_overdue {
        tasks.iter().map(|task| task.with_overdue_from(today)).collect()
    } else {
        tasks
    };

    let tasks = filter_tasks(&tasks, args.filter, today);
    let mut tasks = match args.search.as_deref() {
        Some(query) => search_tasks(&tasks, query),
        None => tasks,
    };
    if let Some(sort) = args.sort {
        sort_tasks(&mut tasks, sort, args.order);
    }
    if tasks.is_empty() {
        msg_warning!(Message::NoTasksToRender);
    }

    let pattern = args.date_format.as_deref().unwrap_or(&config.date_format);
    let formatter =
        ChronoDateFormatter::new(pattern).map_err(|_| msg_error_anyhow!(Message::InvalidDateFormat(pattern.to_string())))?;

    let html =
        render_task_list(&tasks, &formatter).map_err(|e| msg_error_anyhow!(Message::RenderFailed(e.to_string())))?;
    msg_debug!(Message::TasksRendered(tasks.len()));
    Ok(html)
}

fn resolve_today(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| msg_error_anyhow!(Message::InvalidTodayDate(raw.to_string()))),
        None => Ok(Local::now().date_naive()),
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .map_err(|_| msg_error_anyhow!(Message::InputReadFailed(path.display().to_string()))),
        _ => {
            let mut json = String::new();
            io::stdin()
                .read_to_string(&mut json)
                .map_err(|_| msg_error_anyhow!(Message::InputReadFailed("stdin".to_string())))?;
            Ok(json)
        }
    }
}
