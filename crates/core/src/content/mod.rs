pub mod loader;
pub mod model;

pub use loader::{ContentError, parse_site_content};
pub use model::{HighlightEntry, ShowcaseContent, SiteContent};
