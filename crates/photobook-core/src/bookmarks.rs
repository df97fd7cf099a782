//! Labeled page ranges ("chapters") used for highlighting and jumping
//!
//! Ranges are configured with 1-based inclusive page numbers and compared
//! against the engine's 0-based index. Ranges may overlap; every range
//! containing an index is reported.

use crate::types::*;

/// A labeled, inclusive, 1-based page range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    start_page: usize,
    end_page: usize,
    label: String,
}

impl Bookmark {
    pub fn new(start_page: usize, end_page: usize, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if start_page == 0 || start_page > end_page {
            return Err(BookError::InvalidBookmark {
                label,
                start_page,
                end_page,
            });
        }
        Ok(Self {
            start_page,
            end_page,
            label,
        })
    }

    pub fn start_page(&self) -> usize {
        self.start_page
    }

    pub fn end_page(&self) -> usize {
        self.end_page
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// 0-based index the bookmark jumps to
    pub fn target_index(&self) -> usize {
        self.start_page - 1
    }

    /// Whether the 0-based `index` lies in `[start_page - 1, end_page - 1]`
    pub fn contains(&self, index: usize) -> bool {
        index + 1 >= self.start_page && index < self.end_page
    }
}

/// Ordered set of bookmarks
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookmarkIndex {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkIndex {
    pub fn new(bookmarks: Vec<Bookmark>) -> Self {
        Self { bookmarks }
    }

    /// All bookmarks containing `index`, in configuration order
    pub fn active_ranges(&self, index: usize) -> Vec<&Bookmark> {
        self.bookmarks.iter().filter(|b| b.contains(index)).collect()
    }

    /// Positions of the bookmarks containing `index`
    pub fn active_positions(&self, index: usize) -> Vec<usize> {
        self.bookmarks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.contains(index))
            .map(|(position, _)| position)
            .collect()
    }

    pub fn get(&self, position: usize) -> Option<&Bookmark> {
        self.bookmarks.get(position)
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.bookmarks.iter()
    }
}
