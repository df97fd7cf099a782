use crate::bookmarks::{Bookmark, BookmarkIndex};
use crate::constants::*;
use crate::engine::{Engine, ModeSource, ViewportMode};
use crate::pages::{NamingScheme, PageSet};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A bookmark as written in the configuration (1-based, inclusive)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookmarkSpec {
    pub start_page: usize,
    pub end_page: usize,
    pub label: String,
}

impl BookmarkSpec {
    pub fn new(start_page: usize, end_page: usize, label: impl Into<String>) -> Self {
        Self {
            start_page,
            end_page,
            label: label.into(),
        }
    }
}

/// Load-time configuration of a photo book
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookOptions {
    // Pages
    pub page_count: usize,
    pub naming: NamingScheme,

    // Chapters
    pub bookmarks: Vec<BookmarkSpec>,

    // Layout
    pub single_mode_breakpoint_px: f32,

    // Image loading
    pub prefetch_radius: usize,
}

impl Default for BookOptions {
    fn default() -> Self {
        Self {
            page_count: DEFAULT_PAGE_COUNT,
            naming: NamingScheme::default(),
            bookmarks: Vec::new(),
            single_mode_breakpoint_px: SINGLE_MODE_BREAKPOINT_PX,
            prefetch_radius: DEFAULT_PREFETCH_RADIUS,
        }
    }
}

impl BookOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| BookError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.page_count == 0 {
            return Err(BookError::NoPages);
        }

        if self.naming.digits == 0 {
            return Err(BookError::Config(
                "Page number width must be at least 1 digit".to_string(),
            ));
        }

        if self.page_count > MAX_PAGE_COUNT {
            return Err(BookError::Config(format!(
                "Page count {} exceeds the maximum of {}",
                self.page_count, MAX_PAGE_COUNT
            )));
        }

        if self.naming.digits > MAX_NUMBER_DIGITS {
            return Err(BookError::Config(format!(
                "Page number width {} exceeds {} digits",
                self.naming.digits, MAX_NUMBER_DIGITS
            )));
        }

        if self.naming.last_number(self.page_count).is_none() {
            return Err(BookError::Config(format!(
                "First image number {} leaves no room for {} pages",
                self.naming.first_number, self.page_count
            )));
        }

        if self.naming.extension.is_empty() {
            return Err(BookError::Config(
                "Image extension must not be empty".to_string(),
            ));
        }

        if !(self.single_mode_breakpoint_px.is_finite() && self.single_mode_breakpoint_px > 0.0) {
            return Err(BookError::Config(format!(
                "Single mode breakpoint must be a positive width, got {}",
                self.single_mode_breakpoint_px
            )));
        }

        for spec in &self.bookmarks {
            if spec.start_page == 0
                || spec.start_page > spec.end_page
                || spec.end_page > self.page_count
            {
                return Err(BookError::InvalidBookmark {
                    label: spec.label.clone(),
                    start_page: spec.start_page,
                    end_page: spec.end_page,
                });
            }
        }

        Ok(())
    }

    /// Build the immutable page set and bookmark index
    pub fn build(&self) -> Result<Book> {
        self.validate()?;

        let pages = PageSet::from_naming(&self.naming, self.page_count)?;
        let bookmarks = self
            .bookmarks
            .iter()
            .map(|spec| Bookmark::new(spec.start_page, spec.end_page, spec.label.clone()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Book {
            pages,
            bookmarks: BookmarkIndex::new(bookmarks),
        })
    }

    /// Viewport-driven mode source using the configured breakpoint
    pub fn viewport_mode(&self, width_px: f32) -> ViewportMode {
        ViewportMode::new(width_px, self.single_mode_breakpoint_px)
    }
}

/// The static half of a reader session: pages and bookmarks
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub pages: PageSet,
    pub bookmarks: BookmarkIndex,
}

impl Book {
    pub fn into_engine<M: ModeSource>(self, mode_source: M) -> Engine<M> {
        Engine::new(self.pages, self.bookmarks, mode_source)
    }
}
