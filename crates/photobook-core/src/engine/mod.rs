//! Pagination engine - the reader's state machine
//!
//! The engine owns the page set, the bookmarks and the current index. The
//! layout mode is not owned: it is read from an injected [`ModeSource`] at
//! the start of every operation, so a viewport resize takes effect on the
//! next call without the engine subscribing to anything.
//!
//! No operation fails. Unparseable page requests go back to the first page
//! and everything else is clamped into range.

mod spread;
mod transition;

pub use spread::{PageView, Spread, compute_spread, display_page_number};
pub use transition::{prefetch_candidates, resolve_jump, step};

use crate::bookmarks::{Bookmark, BookmarkIndex};
use crate::constants::SINGLE_MODE_BREAKPOINT_PX;
use crate::input::PageRequest;
use crate::pages::PageSet;
use crate::types::*;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Supplies the layout mode on demand
pub trait ModeSource {
    fn current_mode(&self) -> LayoutMode;
}

impl<T: ModeSource + ?Sized> ModeSource for &T {
    fn current_mode(&self) -> LayoutMode {
        (**self).current_mode()
    }
}

impl<T: ModeSource + ?Sized> ModeSource for Rc<T> {
    fn current_mode(&self) -> LayoutMode {
        (**self).current_mode()
    }
}

impl<T: ModeSource + ?Sized> ModeSource for Arc<T> {
    fn current_mode(&self) -> LayoutMode {
        (**self).current_mode()
    }
}

/// A mode that never changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedMode(pub LayoutMode);

impl ModeSource for FixedMode {
    fn current_mode(&self) -> LayoutMode {
        self.0
    }
}

/// Mode derived from the current viewport width
///
/// The front-end updates the width on resize; the engine reads the derived
/// mode on its next operation.
#[derive(Debug)]
pub struct ViewportMode {
    width_bits: AtomicU32,
    breakpoint_px: f32,
}

impl ViewportMode {
    pub fn new(width_px: f32, breakpoint_px: f32) -> Self {
        Self {
            width_bits: AtomicU32::new(width_px.to_bits()),
            breakpoint_px,
        }
    }

    pub fn with_default_breakpoint(width_px: f32) -> Self {
        Self::new(width_px, SINGLE_MODE_BREAKPOINT_PX)
    }

    pub fn set_width(&self, width_px: f32) {
        self.width_bits.store(width_px.to_bits(), Ordering::Relaxed);
    }

    pub fn width(&self) -> f32 {
        f32::from_bits(self.width_bits.load(Ordering::Relaxed))
    }

    pub fn breakpoint(&self) -> f32 {
        self.breakpoint_px
    }
}

impl ModeSource for ViewportMode {
    fn current_mode(&self) -> LayoutMode {
        LayoutMode::for_viewport_width(self.width(), self.breakpoint_px)
    }
}

/// The pagination engine
#[derive(Debug)]
pub struct Engine<M> {
    pages: PageSet,
    bookmarks: BookmarkIndex,
    mode_source: M,
    state: EngineState,
}

impl<M: ModeSource> Engine<M> {
    pub fn new(pages: PageSet, bookmarks: BookmarkIndex, mode_source: M) -> Self {
        let state = EngineState::new(mode_source.current_mode());
        Self {
            pages,
            bookmarks,
            mode_source,
            state,
        }
    }

    pub fn pages(&self) -> &PageSet {
        &self.pages
    }

    pub fn bookmarks(&self) -> &BookmarkIndex {
        &self.bookmarks
    }

    pub fn mode_source(&self) -> &M {
        &self.mode_source
    }

    pub fn last_index(&self) -> usize {
        self.pages.last_index()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Current index paired with the mode as the source reports it now
    pub fn state(&self) -> EngineState {
        EngineState {
            current_index: self.state.current_index,
            mode: self.mode_source.current_mode(),
        }
    }

    pub fn boundary(&self) -> Boundary {
        self.state.boundary(self.last_index())
    }

    fn refresh_mode(&mut self) -> EngineState {
        let mode = self.mode_source.current_mode();
        if mode != self.state.mode {
            log::debug!("Layout mode changed: {:?} -> {:?}", self.state.mode, mode);
            self.state.mode = mode;
        }
        self.state
    }

    fn move_to(&mut self, index: usize, operation: &str) -> EngineState {
        if index != self.state.current_index {
            log::trace!(
                "{}: page {} -> {} ({:?})",
                operation,
                self.state.current_index,
                index,
                self.state.mode
            );
        }
        self.state.current_index = index;
        self.state
    }

    /// Jump to a typed or numeric page request
    pub fn jump_to(&mut self, request: impl Into<PageRequest>) -> EngineState {
        let state = self.refresh_mode();
        let index = resolve_jump(&request.into(), self.last_index(), state.mode);
        self.move_to(index, "jump")
    }

    /// Move one position backward or forward
    pub fn navigate(&mut self, direction: Direction) -> EngineState {
        let state = self.refresh_mode();
        let index = step(state, direction, self.last_index());
        self.move_to(index, "navigate")
    }

    /// Click or tap on the left/right half of the page area
    pub fn click_zone(&mut self, side: Side) -> EngineState {
        self.navigate(side.into())
    }

    /// Jump to a bookmark's first page
    pub fn jump_to_bookmark(&mut self, bookmark: &Bookmark) -> EngineState {
        self.jump_to(bookmark.target_index())
    }

    /// Jump to the bookmark at `position`, if there is one
    pub fn jump_to_bookmark_at(&mut self, position: usize) -> Option<EngineState> {
        let target = self.bookmarks.get(position)?.target_index();
        Some(self.jump_to(target))
    }

    pub fn compute_spread(&self) -> Spread<'_> {
        compute_spread(&self.pages, &self.state())
    }

    pub fn display_page_number(&self) -> usize {
        display_page_number(&self.state(), self.last_index())
    }

    /// Indices of the visible pages, left to right
    pub fn displayed_indices(&self) -> Vec<usize> {
        spread::displayed_indices(self.state(), self.last_index())
    }

    pub fn active_bookmarks(&self) -> Vec<&Bookmark> {
        self.bookmarks.active_ranges(self.state.current_index)
    }

    /// Page indices worth loading ahead of the next navigation
    pub fn prefetch_candidates(&self, radius: usize) -> Vec<usize> {
        prefetch_candidates(self.state(), self.last_index(), radius)
    }

    pub fn view(&self) -> PageView<'_> {
        let state = self.state();
        let last_index = self.last_index();
        PageView {
            state,
            boundary: state.boundary(last_index),
            spread: compute_spread(&self.pages, &state),
            display_page_number: display_page_number(&state, last_index),
            total_pages: self.pages.len(),
            active_bookmarks: self.bookmarks.active_positions(state.current_index),
            can_go_backward: state.current_index > 0,
            can_go_forward: state.current_index < last_index,
        }
    }
}

/// An engine shared across threads
///
/// All calls go through one mutex around the engine, so operations are
/// serialised in lock order.
#[derive(Debug)]
pub struct SharedEngine<M> {
    inner: Arc<Mutex<Engine<M>>>,
}

impl<M> Clone for SharedEngine<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: ModeSource> SharedEngine<M> {
    pub fn new(engine: Engine<M>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `f` with exclusive access to the engine
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine<M>) -> R) -> R {
        // A panic elsewhere never leaves the engine state invalid
        let mut engine = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut engine)
    }

    pub fn jump_to(&self, request: impl Into<PageRequest>) -> EngineState {
        self.with(|engine| engine.jump_to(request))
    }

    pub fn navigate(&self, direction: Direction) -> EngineState {
        self.with(|engine| engine.navigate(direction))
    }

    pub fn click_zone(&self, side: Side) -> EngineState {
        self.with(|engine| engine.click_zone(side))
    }

    pub fn jump_to_bookmark_at(&self, position: usize) -> Option<EngineState> {
        self.with(|engine| engine.jump_to_bookmark_at(position))
    }

    pub fn state(&self) -> EngineState {
        self.with(|engine| engine.state())
    }
}
