pub mod markdown;
pub mod page;
pub mod popups;

pub use markdown::markdown_to_lines;
pub use page::{content_lines, render_content, render_header, render_loading};
pub use popups::{centered_rect, render_flash, render_help_popup, render_legend, truncate_string};
