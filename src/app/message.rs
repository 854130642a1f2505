use crate::data::{CommentResponse, IssueResponse};

/// Work items handled by the background fetch thread
pub enum FetchRequest {
    Issue,
    Comments,
}

/// Result from an async fetch operation
pub enum FetchResult {
    IssueLoaded(IssueResponse),
    IssueFailed(String),
    CommentsLoaded(Vec<CommentResponse>),
    CommentsFailed(String),
}

/// Command to be executed after update
pub enum Command {
    Quit,
    FetchIssue,
    FetchComments,
}

/// All possible messages/events in the application
pub enum Message {
    // Scrolling
    ScrollDown,
    ScrollUp,
    HalfPageDown,
    HalfPageUp,
    GoToTop,
    GoToBottom,

    // Actions
    OpenInBrowser,
    Refresh,

    // Popups
    ToggleHelp,
    DismissHelp,
    DismissFlash,

    // Async results
    FetchComplete(FetchResult),

    // System
    Resize(u16, u16),
    Tick,
    Quit,
}
