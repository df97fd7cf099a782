pub mod bookmarks;
pub mod page_counter;
pub mod reader;

pub use bookmarks::show_bookmarks;
pub use page_counter::show_page_counter;
pub use reader::{ReaderState, show_reader};
