#[derive(Debug, Clone)]
pub enum Message {
    // === AUTH MESSAGES ===
    LoginSuccess(String), // email
    LoginFailed,
    LoggedOut,
    NoActiveSession,
    WrongPassword(i32), // max attempts
    SessionExpired,

    // === PROJECT MESSAGES ===
    ProjectCreated(String),
    ProjectUpdated(String),
    ProjectDeleted(String),
    ProjectNotFound(String),
    ProjectStatusUpdated(String), // new status label
    UnknownStatus(String),
    UnknownPriority(String),
    ProjectsHeader,
    NoProjects,
    ConfirmDeleteProject(String),

    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskDeleted(String),
    TaskNotFound(String),
    NoTasksInProject,
    ConfirmDeleteTask(String),

    // === IDEA MESSAGES ===
    IdeaAdded,
    IdeaUpdated,
    IdeaDeleted,
    IdeaNotFound(String),
    NoIdeasInProject,
    ConfirmDeleteIdea,

    // === STATUS SUGGESTION MESSAGES ===
    SuggestMarkCompleted,
    SuggestMarkInProgress,
    SuggestionApplied(String), // status label

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    BackendNotConfigured,
    ConfigModuleBackend,
    ConfigModuleDefaults,

    // === PROMPTS ===
    PromptProjectName,
    PromptClientName,
    PromptDescription,
    PromptPriority,
    PromptDueDate,
    PromptStatus,
    PromptTaskText,
    PromptIdeaText,
    PromptEmail,
    PromptBackendPassword,
    PromptBackendApiUrl,
    PromptBackendApiKey,
    PromptDefaultPriority,
    PromptSelectModules,

    // === GENERAL MESSAGES ===
    OperationCancelled,
    DataStoragePathError,
}
