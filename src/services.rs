pub mod github;

pub use github::{create_client, fetch_comments, fetch_issue, get_github_token};
