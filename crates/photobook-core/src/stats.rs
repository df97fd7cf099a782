use crate::engine::step;
use crate::options::BookOptions;
use crate::types::*;

/// Calculate statistics for a book configuration
pub fn calculate_statistics(options: &BookOptions) -> Result<BookStatistics> {
    let book = options.build()?;
    let last_index = book.pages.last_index();

    let spread_positions = count_positions(last_index, LayoutMode::Spread);
    let single_positions = count_positions(last_index, LayoutMode::Single);

    let pages_covered_by_bookmarks = (0..book.pages.len())
        .filter(|&index| !book.bookmarks.active_ranges(index).is_empty())
        .count();

    Ok(BookStatistics {
        pages: book.pages.len(),
        spread_positions,
        single_positions,
        unpaired_last: last_index % 2 == 1,
        bookmarks: book.bookmarks.len(),
        pages_covered_by_bookmarks,
        uncovered_pages: book.pages.len() - pages_covered_by_bookmarks,
    })
}

/// Walk forward from the first page until navigation stops moving
fn count_positions(last_index: usize, mode: LayoutMode) -> usize {
    let mut state = EngineState::new(mode);
    let mut positions = 1;
    loop {
        let next = step(state, Direction::Forward, last_index);
        if next == state.current_index {
            return positions;
        }
        state.current_index = next;
        positions += 1;
    }
}
