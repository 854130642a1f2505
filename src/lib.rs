pub mod app;
pub mod data;
pub mod icons;
pub mod services;
pub mod utils;
pub mod view;

pub use app::{update, App, Command, FetchResult, Message};
pub use data::{Classification, IssuePage, IssueRef, StateClass};
pub use utils::get_current_repo;
pub use view::ui;
