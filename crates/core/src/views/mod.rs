pub mod showcase;

pub use showcase::{ShowcaseLayout, layout_showcase, render_showcase};
