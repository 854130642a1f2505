use chrono::{DateTime, Utc};
use ratatui::style::Color;
use serde::Deserialize;

// Classification types

/// One tag attached to an issue. Extra API fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Raw status fields of an issue, the input to classification
#[derive(Debug, Clone)]
pub struct IssueStatus {
    pub is_closed: bool,
    pub labels: Vec<Label>,
}

impl IssueStatus {
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label.name == name)
    }
}

/// Style class driving how an issue's state badge renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateClass {
    NeedsDiagnosis,
    Closed,
    SiteContacted,
    ReadyForOutreach,
}

impl StateClass {
    pub fn color(self) -> Color {
        match self {
            StateClass::NeedsDiagnosis => Color::Yellow,
            StateClass::Closed => Color::Magenta,
            StateClass::SiteContacted => Color::Blue,
            StateClass::ReadyForOutreach => Color::Green,
        }
    }

    pub fn to_str(self) -> &'static str {
        match self {
            StateClass::NeedsDiagnosis => "need",
            StateClass::Closed => "close",
            StateClass::SiteContacted => "sitewait",
            StateClass::ReadyForOutreach => "ready",
        }
    }
}

/// Derived display state of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub display_text: &'static str,
    pub style_class: StateClass,
}

impl Classification {
    pub fn badge(&self) -> (&'static str, Color) {
        (self.display_text, self.style_class.color())
    }
}

// REST API response types

/// Issue state as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    pub fn is_closed(self) -> bool {
        matches!(self, IssueState::Closed)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRef {
    pub login: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueResponse {
    pub number: u64,
    pub title: String,
    pub state: IssueState,
    pub body: Option<String>,
    pub comments: u64,
    pub created_at: DateTime<Utc>,
    pub user: UserRef,
    pub labels: Vec<Label>,
}

impl IssueResponse {
    pub fn status(&self) -> IssueStatus {
        IssueStatus {
            is_closed: self.state.is_closed(),
            labels: self.labels.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentResponse {
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user: UserRef,
}
