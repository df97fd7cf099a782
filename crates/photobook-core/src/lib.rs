pub mod bookmarks;
pub mod constants;
pub mod engine;
mod input;
mod options;
mod pages;
mod stats;
mod types;

pub use bookmarks::{Bookmark, BookmarkIndex};
pub use engine::{
    Engine, FixedMode, ModeSource, PageView, SharedEngine, Spread, ViewportMode,
    compute_spread, display_page_number, resolve_jump, step,
};
pub use input::{PageRequest, parse_page_number};
pub use options::*;
pub use pages::{NamingScheme, PageRef, PageSet};
pub use stats::calculate_statistics;
pub use types::*;
