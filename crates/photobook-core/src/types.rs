use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Book has no pages")]
    NoPages,
    #[error("Page index {index} out of range (book has {len} pages)")]
    OutOfRange { index: usize, len: usize },
    #[error("Invalid bookmark '{label}': pages {start_page}..={end_page}")]
    InvalidBookmark {
        label: String,
        start_page: usize,
        end_page: usize,
    },
}

pub type Result<T> = std::result::Result<T, BookError>;

/// How pages are laid out on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// Two pages side by side (wide viewports)
    #[default]
    Spread,
    /// One page at a time (narrow viewports)
    Single,
}

impl LayoutMode {
    /// Viewports at or below the breakpoint read one page at a time
    pub fn for_viewport_width(width_px: f32, breakpoint_px: f32) -> Self {
        if width_px <= breakpoint_px {
            LayoutMode::Single
        } else {
            LayoutMode::Spread
        }
    }

    /// How far one navigation step moves the current index
    pub fn step_size(self) -> usize {
        match self {
            LayoutMode::Spread => 2,
            LayoutMode::Single => 1,
        }
    }
}

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

/// Half of the page area that received a click or tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl From<Side> for Direction {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Direction::Backward,
            Side::Right => Direction::Forward,
        }
    }
}

/// Where the current index sits relative to the ends of the book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    First,
    Middle,
    Last,
}

/// The only mutable state of a reader session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineState {
    pub current_index: usize,
    pub mode: LayoutMode,
}

impl EngineState {
    pub fn new(mode: LayoutMode) -> Self {
        Self {
            current_index: 0,
            mode,
        }
    }

    /// First wins over Last for a one-page book
    pub fn boundary(&self, last_index: usize) -> Boundary {
        if self.current_index == 0 {
            Boundary::First
        } else if self.current_index >= last_index {
            Boundary::Last
        } else {
            Boundary::Middle
        }
    }
}

/// Summary of a book configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BookStatistics {
    /// Total number of pages
    pub pages: usize,
    /// Distinct positions reachable in spread mode
    pub spread_positions: usize,
    /// Distinct positions reachable in single mode
    pub single_positions: usize,
    /// Whether the final page is shown alone in spread mode
    pub unpaired_last: bool,
    /// Number of configured bookmarks
    pub bookmarks: usize,
    /// Pages that fall inside at least one bookmark range
    pub pages_covered_by_bookmarks: usize,
    /// Pages outside every bookmark range
    pub uncovered_pages: usize,
}
