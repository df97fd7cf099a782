//! Pure transition rules of the pagination state machine
//!
//! Every function here maps an explicit state (or raw request) to the next
//! index. None of them can fail: unparseable requests fall back to the
//! first page and out-of-range requests are clamped.

use super::spread::displayed_indices;
use crate::input::PageRequest;
use crate::types::*;

/// Normalise a raw page request into a valid index
///
/// In spread mode only even indices anchor a spread, so an odd target is
/// folded into the following spread (and re-clamped at the end of the book).
pub fn resolve_jump(request: &PageRequest, last_index: usize, mode: LayoutMode) -> usize {
    let Some(requested) = request.as_integer() else {
        log::debug!("Unparseable page request {:?}, returning to first page", request);
        return 0;
    };

    let clamped = clamp_index(requested, last_index);
    if usize::try_from(requested).ok() != Some(clamped) {
        log::debug!(
            "Page request {} outside 0..={}, clamped to {}",
            requested,
            last_index,
            clamped
        );
    }

    match mode {
        LayoutMode::Spread if clamped % 2 == 1 => (clamped + 1).min(last_index),
        _ => clamped,
    }
}

fn clamp_index(requested: i64, last_index: usize) -> usize {
    match usize::try_from(requested) {
        Ok(index) => index.min(last_index),
        // Only negative values fail the conversion on 64-bit targets
        Err(_) if requested < 0 => 0,
        Err(_) => last_index,
    }
}

/// Force an odd index even before a spread-mode step
///
/// Odd indices appear transiently after switching from single mode. An odd
/// final page is a valid spread anchor and is left alone.
pub(crate) fn normalize_base(index: usize, last_index: usize, mode: LayoutMode) -> usize {
    match mode {
        LayoutMode::Spread if index % 2 == 1 && index < last_index => index + 1,
        _ => index.min(last_index),
    }
}

/// Index reached by one navigation step from `state`
pub fn step(state: EngineState, direction: Direction, last_index: usize) -> usize {
    let base = normalize_base(state.current_index, last_index, state.mode);

    match (state.mode, direction) {
        (LayoutMode::Single, Direction::Backward) => base.saturating_sub(1),
        (LayoutMode::Single, Direction::Forward) => (base + 1).min(last_index),
        (LayoutMode::Spread, Direction::Backward) => match base {
            0 => 0,
            // Collapse onto the lone cover page
            2 => 0,
            // Odd final page: the previous spread is anchored one below
            odd if odd % 2 == 1 => odd - 1,
            even => even - 2,
        },
        (LayoutMode::Spread, Direction::Forward) => {
            if base >= last_index {
                base
            } else {
                // A step past the end snaps onto the final page
                (base + 2).min(last_index)
            }
        }
    }
}

/// Pages shown at the `radius` neighbouring positions, nearest first
///
/// Forward and backward neighbours alternate. Pages already on screen and
/// duplicates are skipped.
pub fn prefetch_candidates(state: EngineState, last_index: usize, radius: usize) -> Vec<usize> {
    let mut seen = displayed_indices(state, last_index);
    let mut candidates = Vec::new();

    let mut forward = state;
    let mut backward = state;
    for _ in 0..radius {
        forward.current_index = step(forward, Direction::Forward, last_index);
        backward.current_index = step(backward, Direction::Backward, last_index);

        for position in [forward, backward] {
            for index in displayed_indices(position, last_index) {
                if !seen.contains(&index) {
                    seen.push(index);
                    candidates.push(index);
                }
            }
        }
    }

    candidates
}
