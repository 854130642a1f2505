pub mod git;
pub mod time;

pub use git::{get_current_repo, parse_github_url};
pub use time::{format_short_date, relative_from};
