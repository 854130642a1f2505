use anyhow::Result;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::data::{CommentItem, IssuePage, IssueRef, SPINNER_FRAMES};
use crate::services::{create_client, fetch_comments, fetch_issue};

use super::message::{FetchRequest, FetchResult};

/// Notice text for a failed issue fetch
pub const ISSUE_FETCH_ERROR: &str = "There was an error retrieving the issue.";
/// Notice text for a failed comments fetch
pub const COMMENTS_FETCH_ERROR: &str = "There was an error retrieving issue comments.";

/// How long a flash notice stays up before dismissing itself
pub const FLASH_DISMISS_AFTER: Duration = Duration::from_millis(2000);

/// Rows of fixed chrome around the scrollable content:
/// three header lines, a separator, and the key legend
pub const CHROME_ROWS: u16 = 5;

/// A transient notice shown over the page
pub struct Flash {
    pub text: String,
    pub shown_at: Instant,
}

pub struct App {
    // Target issue
    pub target: IssueRef,

    // Data state
    pub issue: Option<IssuePage>,
    pub comments: Vec<CommentItem>,

    // Loading state
    pub loading_issue: bool,
    pub loading_comments: bool,

    // Notice state
    pub flash: Option<Flash>,

    // Popup state
    pub show_help_popup: bool,

    // Scroll state
    pub scroll: u16,
    pub content_height: u16,
    pub viewport: (u16, u16),

    // Async communication
    pub fetch_tx: Sender<FetchRequest>,
    pub result_rx: Receiver<FetchResult>,

    // Spinner state
    pub spinner_idx: usize,
    pub last_spinner_update: Instant,
}

impl App {
    pub fn new(target: IssueRef) -> Result<Self> {
        let (fetch_tx, fetch_rx) = mpsc::channel::<FetchRequest>();
        let (result_tx, result_rx) = mpsc::channel::<FetchResult>();

        // Spawn background thread for fetching
        let worker_target = target.clone();
        thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            while let Ok(request) = fetch_rx.recv() {
                let msg = match request {
                    FetchRequest::Issue => {
                        let result = rt.block_on(async {
                            let client = create_client()?;
                            fetch_issue(&client, &worker_target).await
                        });
                        match result {
                            Ok(issue) => FetchResult::IssueLoaded(issue),
                            Err(e) => FetchResult::IssueFailed(format!("{}", e)),
                        }
                    }
                    FetchRequest::Comments => {
                        let result = rt.block_on(async {
                            let client = create_client()?;
                            fetch_comments(&client, &worker_target).await
                        });
                        match result {
                            Ok(comments) => FetchResult::CommentsLoaded(comments),
                            Err(e) => FetchResult::CommentsFailed(format!("{}", e)),
                        }
                    }
                };
                if result_tx.send(msg).is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            target,
            issue: None,
            comments: Vec::new(),
            loading_issue: false,
            loading_comments: false,
            flash: None,
            show_help_popup: false,
            scroll: 0,
            content_height: 0,
            viewport: (80, 24),
            fetch_tx,
            result_rx,
            spinner_idx: 0,
            last_spinner_update: Instant::now(),
        })
    }

    // Getters

    pub fn is_loading(&self) -> bool {
        self.loading_issue || self.loading_comments
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_idx]
    }

    // Scroll accounting

    pub fn content_viewport(&self) -> u16 {
        self.viewport.1.saturating_sub(CHROME_ROWS)
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.content_viewport())
    }

    pub fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    // Notice management

    pub fn show_flash(&mut self, text: &str) {
        self.flash = Some(Flash {
            text: text.to_string(),
            shown_at: Instant::now(),
        });
    }

    // Spinner update

    pub fn update_spinner(&mut self) {
        if self.last_spinner_update.elapsed() >= Duration::from_millis(80) {
            self.spinner_idx = (self.spinner_idx + 1) % SPINNER_FRAMES.len();
            self.last_spinner_update = Instant::now();
        }
    }

    // Fetch management

    pub fn start_issue_fetch(&mut self) {
        self.loading_issue = true;
        let _ = self.fetch_tx.send(FetchRequest::Issue);
    }

    pub fn start_comments_fetch(&mut self) {
        self.loading_comments = true;
        let _ = self.fetch_tx.send(FetchRequest::Comments);
    }

    pub fn check_fetch_result(&mut self) -> Option<FetchResult> {
        self.result_rx.try_recv().ok()
    }
}
