use std::process::Command as ProcessCommand;

use chrono::Utc;

use crate::data::{CommentItem, IssuePage};
use crate::view::components::content_lines;

use super::message::{Command, FetchResult, Message};
use super::model::{App, COMMENTS_FETCH_ERROR, FLASH_DISMISS_AFTER, ISSUE_FETCH_ERROR};

/// Update the application state based on a message.
/// Returns an optional command to be executed by the main loop.
pub fn update(app: &mut App, msg: Message) -> Option<Command> {
    match msg {
        // Scrolling
        Message::ScrollDown => {
            app.scroll = (app.scroll + 1).min(app.max_scroll());
            None
        }
        Message::ScrollUp => {
            app.scroll = app.scroll.saturating_sub(1);
            None
        }
        Message::HalfPageDown => {
            app.scroll = (app.scroll + half_page(app)).min(app.max_scroll());
            None
        }
        Message::HalfPageUp => {
            app.scroll = app.scroll.saturating_sub(half_page(app));
            None
        }
        Message::GoToTop => {
            app.scroll = 0;
            None
        }
        Message::GoToBottom => {
            app.scroll = app.max_scroll();
            None
        }

        // Actions
        Message::OpenInBrowser => {
            open_in_browser(app);
            None
        }
        Message::Refresh => refresh(app),

        // Popups
        Message::ToggleHelp => {
            app.show_help_popup = !app.show_help_popup;
            None
        }
        Message::DismissHelp => {
            app.show_help_popup = false;
            None
        }
        Message::DismissFlash => {
            app.flash = None;
            None
        }

        // Async results
        Message::FetchComplete(result) => handle_fetch_result(app, result),

        // System
        Message::Resize(width, height) => {
            app.viewport = (width, height);
            refresh_content_height(app);
            app.clamp_scroll();
            None
        }
        Message::Tick => {
            tick(app);
            None
        }
        Message::Quit => Some(Command::Quit),
    }
}

// Helper functions

fn half_page(app: &App) -> u16 {
    (app.content_viewport() / 2).max(1)
}

fn open_in_browser(app: &App) {
    let url = format!(
        "https://github.com/{}/{}/issues/{}",
        app.target.owner, app.target.repo, app.target.number
    );
    let _ = ProcessCommand::new("open").arg(&url).spawn();
}

fn refresh(app: &mut App) -> Option<Command> {
    app.issue = None;
    app.comments.clear();
    app.flash = None;
    app.scroll = 0;
    app.content_height = 0;
    Some(Command::FetchIssue)
}

fn tick(app: &mut App) {
    if app.is_loading() {
        app.update_spinner();
    }

    if let Some(flash) = &app.flash {
        if flash.shown_at.elapsed() >= FLASH_DISMISS_AFTER {
            app.flash = None;
        }
    }
}

fn refresh_content_height(app: &mut App) {
    app.content_height = match &app.issue {
        Some(issue) => content_lines(issue, &app.comments, app.viewport.0).len() as u16,
        None => 0,
    };
}

fn handle_fetch_result(app: &mut App, result: FetchResult) -> Option<Command> {
    match result {
        FetchResult::IssueLoaded(response) => {
            let has_comments = response.comments > 0;
            app.issue = Some(IssuePage::from_response(&response));
            app.loading_issue = false;
            refresh_content_height(app);

            // Comments load only after the issue resolves, and only when it has any
            if has_comments {
                Some(Command::FetchComments)
            } else {
                None
            }
        }
        FetchResult::IssueFailed(_) => {
            app.loading_issue = false;
            app.show_flash(ISSUE_FETCH_ERROR);
            None
        }
        FetchResult::CommentsLoaded(responses) => {
            let now = Utc::now();
            app.comments = responses
                .iter()
                .map(|comment| CommentItem::from_response(comment, now))
                .collect();
            app.loading_comments = false;
            refresh_content_height(app);
            None
        }
        FetchResult::CommentsFailed(_) => {
            app.loading_comments = false;
            app.show_flash(COMMENTS_FETCH_ERROR);
            None
        }
    }
}
