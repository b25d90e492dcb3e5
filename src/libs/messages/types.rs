//! Message type definitions for playplan.
//!
//! Every piece of user-facing text is a variant of [`Message`]. Variants that
//! need runtime context carry it as fields; the text itself lives in the
//! `Display` implementation in `display.rs`.

#[derive(Debug, Clone)]
pub enum Message {
    // === CHILD MESSAGES ===
    ChildAdded(String),
    ChildUpdated(String),
    ChildDeleted(String),
    ChildNotFound(String),
    ChildRejected(String),
    ChildRenameRejected(String, String), // old name, new name
    ChildrenHeader,
    NoChildrenFound,
    ConfirmDeleteChild(String),

    // === ACTIVITY MESSAGES ===
    ActivityAdded(String, String), // title, id
    ActivityUpdated(String),
    ActivityDeleted(String),
    ActivityNotFound(String),
    ActivityRejected(String, String), // child, title
    ActivityCompleted(String),
    ActivityReopened(String),
    ActivitiesHeader(String),
    NoActivitiesFound(String),
    ActivitiesCleared(String),
    ConfirmDeleteActivity(String),
    ConfirmClearActivities(String, usize),
    InvalidActivityId(String),

    // === PROGRESS MESSAGES ===
    DailySummaryHeader(String),
    ComparisonHeader,
    CompletedTitlesHeader,
    NoCompletedActivities,
    SuggestionsHeader(String),

    // === DATA FILE MESSAGES ===
    DataFileNotFound(String),
    DataFileLoadFailed(String),
    DataFileSaveFailed(String),
    DataFileCreated(String),
    DataFileWarning(String),
    DataFileWarnings(usize),
    ConfirmOverwriteDataFile(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleDataFile,
    ConfigModuleRecommendations,
    PromptSelectModules,
    PromptDataFile,
    PromptStrictParsing,
    PromptDailyTarget(String),
    PromptWeeklyTarget(String),
    PromptMonthlyTarget(String),

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // child, format
    ExportCompleted(String),
    ExportFailed(String),

    // === INPUT MESSAGES ===
    InvalidDate(String),
    InvalidDateTime(String),
    InvalidDuration(String),

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
