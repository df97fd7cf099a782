use eframe::egui;
use photobook_core::Direction;

use super::ReaderState;

/// Prev/next buttons around an editable page number
pub fn show_page_counter(ui: &mut egui::Ui, state: &mut ReaderState) {
    let (can_go_backward, can_go_forward, total_pages) = {
        let view = state.engine.view();
        (view.can_go_backward, view.can_go_forward, view.total_pages)
    };

    ui.horizontal(|ui| {
        if ui
            .add_enabled(can_go_backward, egui::Button::new("◀"))
            .clicked()
        {
            state.engine.navigate(Direction::Backward);
        }

        let response = ui.add(
            egui::TextEdit::singleline(&mut state.page_input)
                .desired_width(50.0)
                .horizontal_align(egui::Align::Center),
        );
        state.page_input_focused = response.has_focus();
        if response.lost_focus() {
            state.submit_page_input();
        }

        ui.label(format!("/ {total_pages}"));

        if ui
            .add_enabled(can_go_forward, egui::Button::new("▶"))
            .clicked()
        {
            state.engine.navigate(Direction::Forward);
        }

        ui.separator();
        ui.label(format!("{:?}", state.engine.state().mode));
    });
}
