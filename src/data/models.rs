use chrono::{DateTime, Utc};

use super::classify::{classify, join_label_names};
use super::types::{Classification, CommentResponse, IssueResponse};
use crate::utils::{format_short_date, relative_from};

/// Coordinates of the issue being viewed
#[derive(Debug, Clone)]
pub struct IssueRef {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

/// Flat view model for the issue header and body
#[derive(Debug, Clone)]
pub struct IssuePage {
    pub number: u64,
    pub title: String,
    pub reporter: String,
    pub created_at: String,
    pub comment_count: u64,
    pub state: Classification,
    pub labels: String,
    pub body: String,
}

impl IssuePage {
    /// Shape a raw issue response for display
    pub fn from_response(response: &IssueResponse) -> Self {
        Self {
            number: response.number,
            title: response.title.clone(),
            reporter: response.user.login.clone(),
            created_at: format_short_date(response.created_at),
            comment_count: response.comments,
            state: classify(&response.status()),
            labels: join_label_names(&response.labels),
            body: response.body.clone().unwrap_or_default(),
        }
    }
}

/// One comment in the thread
#[derive(Debug, Clone)]
pub struct CommentItem {
    pub commenter: String,
    pub created_at: String,
    pub avatar_url: String,
    pub body: String,
}

impl CommentItem {
    pub fn from_response(response: &CommentResponse, now: DateTime<Utc>) -> Self {
        Self {
            commenter: response.user.login.clone(),
            created_at: relative_from(response.created_at, now),
            avatar_url: response.user.avatar_url.clone(),
            body: response.body.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::data::types::{IssueState, Label, StateClass, UserRef};

    fn response() -> IssueResponse {
        IssueResponse {
            number: 100,
            title: "Dropdown menu does not open".to_string(),
            state: IssueState::Open,
            body: Some("1. Tap the menu".to_string()),
            comments: 4,
            created_at: Utc.with_ymd_and_hms(2014, 6, 9, 15, 12, 39).unwrap(),
            user: UserRef {
                login: "miketaylr".to_string(),
                avatar_url: "https://avatars.example/1.png".to_string(),
            },
            labels: vec![
                Label {
                    name: "bug".to_string(),
                },
                Label {
                    name: "sitewait".to_string(),
                },
            ],
        }
    }

    #[test]
    fn page_merges_classification_and_labels() {
        let page = IssuePage::from_response(&response());
        assert_eq!(page.number, 100);
        assert_eq!(page.title, "Dropdown menu does not open");
        assert_eq!(page.reporter, "miketaylr");
        assert_eq!(page.created_at, "06/09/2014");
        assert_eq!(page.comment_count, 4);
        assert_eq!(page.state.display_text, "Site Contacted");
        assert_eq!(page.state.style_class, StateClass::SiteContacted);
        assert_eq!(page.labels, "bug, sitewait");
        assert_eq!(page.body, "1. Tap the menu");
    }

    #[test]
    fn closed_issue_classifies_as_closed() {
        let mut resp = response();
        resp.state = IssueState::Closed;
        let page = IssuePage::from_response(&resp);
        assert_eq!(page.state.display_text, "Closed");
        assert_eq!(page.state.style_class, StateClass::Closed);
    }

    #[test]
    fn missing_body_becomes_empty_string() {
        let mut resp = response();
        resp.body = None;
        assert_eq!(IssuePage::from_response(&resp).body, "");
    }

    #[test]
    fn comment_uses_relative_date() {
        let now = Utc.with_ymd_and_hms(2014, 6, 12, 8, 0, 0).unwrap();
        let comment = CommentResponse {
            body: Some("Confirmed.".to_string()),
            created_at: Utc.with_ymd_and_hms(2014, 6, 10, 8, 0, 0).unwrap(),
            user: UserRef {
                login: "karlcow".to_string(),
                avatar_url: "https://avatars.example/3.png".to_string(),
            },
        };

        let item = CommentItem::from_response(&comment, now);
        assert_eq!(item.commenter, "karlcow");
        assert_eq!(item.created_at, "2 days ago");
        assert_eq!(item.avatar_url, "https://avatars.example/3.png");
        assert_eq!(item.body, "Confirmed.");
    }

    #[test]
    fn missing_comment_body_becomes_empty_string() {
        let now = Utc.with_ymd_and_hms(2014, 6, 12, 8, 0, 0).unwrap();
        let comment = CommentResponse {
            body: None,
            created_at: Utc.with_ymd_and_hms(2014, 6, 12, 7, 59, 30).unwrap(),
            user: UserRef {
                login: "karlcow".to_string(),
                avatar_url: "https://avatars.example/3.png".to_string(),
            },
        };

        let item = CommentItem::from_response(&comment, now);
        assert_eq!(item.body, "");
        assert_eq!(item.created_at, "a few seconds ago");
    }
}
