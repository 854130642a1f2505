pub mod message;
pub mod model;
pub mod update;

pub use message::{Command, FetchResult, Message};
pub use model::App;
pub use update::update;
