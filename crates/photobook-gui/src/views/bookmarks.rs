use eframe::egui;

use super::ReaderState;

/// One button per bookmark; bookmarks covering the current page are highlighted
pub fn show_bookmarks(ui: &mut egui::Ui, state: &mut ReaderState) {
    if state.engine.bookmarks().is_empty() {
        return;
    }

    let active = state.engine.view().active_bookmarks;
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        for (position, bookmark) in state.engine.bookmarks().iter().enumerate() {
            let response = ui
                .selectable_label(active.contains(&position), bookmark.label())
                .on_hover_text(format!(
                    "Pages {}-{}",
                    bookmark.start_page(),
                    bookmark.end_page()
                ));
            if response.clicked() {
                clicked = Some(position);
            }
        }
    });

    if let Some(position) = clicked {
        state.engine.jump_to_bookmark_at(position);
    }
}
