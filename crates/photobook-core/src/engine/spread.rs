use crate::pages::{PageRef, PageSet};
use crate::types::*;

/// What is on screen for a given state
///
/// In spread mode the current index tracks the right-hand page; the left
/// page is always the one before it. The first and last positions leave
/// one slot empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spread<'a> {
    Pair {
        left: Option<&'a PageRef>,
        right: Option<&'a PageRef>,
    },
    Single(&'a PageRef),
}

impl<'a> Spread<'a> {
    pub fn left(&self) -> Option<&'a PageRef> {
        match self {
            Spread::Pair { left, .. } => *left,
            Spread::Single(_) => None,
        }
    }

    pub fn right(&self) -> Option<&'a PageRef> {
        match self {
            Spread::Pair { right, .. } => *right,
            Spread::Single(_) => None,
        }
    }

    pub fn single(&self) -> Option<&'a PageRef> {
        match self {
            Spread::Single(page) => Some(*page),
            Spread::Pair { .. } => None,
        }
    }

    /// Visible pages, left to right
    pub fn pages(&self) -> Vec<&'a PageRef> {
        match self {
            Spread::Pair { left, right } => left.iter().chain(right.iter()).copied().collect(),
            Spread::Single(page) => vec![*page],
        }
    }
}

/// Indices of the pages visible for `state`, left to right
pub(crate) fn displayed_indices(state: EngineState, last_index: usize) -> Vec<usize> {
    let index = state.current_index.min(last_index);
    match (state.mode, state.boundary(last_index)) {
        (LayoutMode::Single, _) => vec![index],
        (LayoutMode::Spread, Boundary::First) => vec![0],
        (LayoutMode::Spread, Boundary::Last) => vec![last_index],
        (LayoutMode::Spread, Boundary::Middle) => vec![index - 1, index],
    }
}

/// Resolve the spread for `state` against a page set
pub fn compute_spread<'a>(pages: &'a PageSet, state: &EngineState) -> Spread<'a> {
    let last_index = pages.last_index();
    let index = state.current_index.min(last_index);

    match (state.mode, state.boundary(last_index)) {
        (LayoutMode::Single, _) => Spread::Single(pages.clamped(index)),
        (LayoutMode::Spread, Boundary::First) => Spread::Pair {
            left: None,
            right: Some(pages.clamped(0)),
        },
        (LayoutMode::Spread, Boundary::Last) => Spread::Pair {
            left: Some(pages.clamped(last_index)),
            right: None,
        },
        (LayoutMode::Spread, Boundary::Middle) => Spread::Pair {
            left: Some(pages.clamped(index - 1)),
            right: Some(pages.clamped(index)),
        },
    }
}

/// Number shown in the page counter
///
/// Mid-book in spread mode this is the right page's 0-based index, which
/// keeps the counter stable across single steps.
pub fn display_page_number(state: &EngineState, last_index: usize) -> usize {
    match (state.mode, state.boundary(last_index)) {
        (LayoutMode::Single, _) => state.current_index.min(last_index) + 1,
        (LayoutMode::Spread, Boundary::First) => 1,
        (LayoutMode::Spread, Boundary::Last) => last_index + 1,
        (LayoutMode::Spread, Boundary::Middle) => state.current_index,
    }
}

/// Snapshot of everything a front-end renders after an operation
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub state: EngineState,
    pub boundary: Boundary,
    pub spread: Spread<'a>,
    pub display_page_number: usize,
    pub total_pages: usize,
    /// Positions of the active bookmarks in configuration order
    pub active_bookmarks: Vec<usize>,
    pub can_go_backward: bool,
    pub can_go_forward: bool,
}
