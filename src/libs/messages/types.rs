/// User-facing messages of the taskcard application.
///
/// Text for every variant lives in `display.rs`; callers pass variants to
/// the `msg_*` macros instead of formatting strings inline.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigSavedTo(String), // path
    ConfigParseError(String),
    InvalidDateFormat(String), // pattern

    // === INPUT MESSAGES ===
    InputReadFailed(String),  // path or "stdin"
    InvalidTasksJson(String), // parser error
    InvalidTodayDate(String), // raw value
    TasksLoaded(usize),

    // === RENDER MESSAGES ===
    NoTasksToRender,
    TasksRendered(usize),
    RenderFailed(String),
    OutputWritten(String),      // path
    OutputWriteFailed(String), // path
}
