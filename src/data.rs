pub mod classify;
pub mod models;
pub mod types;

pub use classify::{classify, join_label_names};
pub use models::{CommentItem, IssuePage, IssueRef};
pub use types::{
    Classification, CommentResponse, IssueResponse, IssueState, IssueStatus, Label, StateClass,
    UserRef,
};

pub use crate::icons::SPINNER_FRAMES;
