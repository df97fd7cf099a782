use crate::constants::*;
use crate::types::*;
use std::fmt;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference to one page image
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRef(String);

impl PageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How page image references are generated
///
/// Page `i` maps to `{directory}/{prefix}{first_number + i}.{extension}`,
/// with the number zero-padded to `digits` characters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NamingScheme {
    pub directory: String,
    pub prefix: String,
    pub first_number: usize,
    pub digits: usize,
    pub extension: String,
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self {
            directory: DEFAULT_IMAGE_DIRECTORY.to_string(),
            prefix: DEFAULT_IMAGE_PREFIX.to_string(),
            first_number: DEFAULT_FIRST_NUMBER,
            digits: DEFAULT_NUMBER_DIGITS,
            extension: DEFAULT_IMAGE_EXTENSION.to_string(),
        }
    }
}

impl NamingScheme {
    /// Number in the file name of the last of `count` pages, if it fits
    pub fn last_number(&self, count: usize) -> Option<usize> {
        self.first_number.checked_add(count.saturating_sub(1))
    }

    pub fn page_ref(&self, index: usize) -> PageRef {
        let file_name = format!(
            "{}{:0width$}.{}",
            self.prefix,
            self.first_number + index,
            self.extension,
            width = self.digits
        );
        if self.directory.is_empty() {
            PageRef(file_name)
        } else {
            PageRef(format!(
                "{}/{}",
                self.directory.trim_end_matches('/'),
                file_name
            ))
        }
    }
}

/// Immutable, non-empty ordered sequence of pages
#[derive(Debug, Clone, PartialEq)]
pub struct PageSet {
    pages: Vec<PageRef>,
}

impl PageSet {
    pub fn new(pages: Vec<PageRef>) -> Result<Self> {
        if pages.is_empty() {
            return Err(BookError::NoPages);
        }
        Ok(Self { pages })
    }

    /// Generate `count` page references from a naming scheme
    pub fn from_naming(naming: &NamingScheme, count: usize) -> Result<Self> {
        if naming.last_number(count).is_none() {
            return Err(BookError::Config(format!(
                "Page numbers overflow starting from {}",
                naming.first_number
            )));
        }
        Self::new((0..count).map(|i| naming.page_ref(i)).collect())
    }

    pub fn get(&self, index: usize) -> Result<&PageRef> {
        self.pages.get(index).ok_or(BookError::OutOfRange {
            index,
            len: self.pages.len(),
        })
    }

    /// Page lookup for indices the engine has already clamped
    pub(crate) fn clamped(&self, index: usize) -> &PageRef {
        &self.pages[index.min(self.last_index())]
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false: construction rejects empty page lists
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.pages.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageRef> {
        self.pages.iter()
    }
}
