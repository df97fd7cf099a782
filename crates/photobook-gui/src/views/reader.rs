use eframe::egui;
use photobook_core::{
    BookError, BookOptions, BookStatistics, Boundary, Engine, EngineState, LayoutMode, Side,
    ViewportMode,
};
use photobook_runtime::{BookCommand, WorkerChannels};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::rc::Rc;

/// Live reader session: the engine plus everything needed to draw it
pub struct ReaderState {
    pub engine: Engine<Rc<ViewportMode>>,
    pub viewport: Rc<ViewportMode>,
    pub options: BookOptions,
    pub stats: BookStatistics,
    pub base_dir: PathBuf,
    pub page_input: String,
    pub page_input_focused: bool,
    textures: HashMap<usize, egui::TextureHandle>,
    pending: HashSet<usize>,
    failed: HashSet<usize>,
    last_synced: Option<EngineState>,
}

impl ReaderState {
    pub fn open(
        options: BookOptions,
        stats: BookStatistics,
        base_dir: PathBuf,
        width_px: f32,
    ) -> Result<Self, BookError> {
        let viewport = Rc::new(options.viewport_mode(width_px));
        let engine = options.build()?.into_engine(Rc::clone(&viewport));
        Ok(Self {
            engine,
            viewport,
            options,
            stats,
            base_dir,
            page_input: String::new(),
            page_input_focused: false,
            textures: HashMap::new(),
            pending: HashSet::new(),
            failed: HashSet::new(),
            last_synced: None,
        })
    }

    pub fn page_path(&self, page_index: usize) -> Option<PathBuf> {
        let page = self.engine.pages().get(page_index).ok()?;
        Some(self.base_dir.join(page.as_path()))
    }

    /// Request images and refresh the counter after the state changed
    ///
    /// Called every frame; does nothing unless the index or the mode moved.
    pub fn sync(&mut self, channels: &WorkerChannels) {
        let state = self.engine.state();
        if self.last_synced == Some(state) {
            return;
        }
        self.last_synced = Some(state);

        if !self.page_input_focused {
            self.page_input = self.engine.display_page_number().to_string();
        }

        let displayed = self.engine.displayed_indices();
        let prefetch = self.engine.prefetch_candidates(self.options.prefetch_radius);

        // Drop textures that are neither visible nor about to be
        self.textures
            .retain(|index, _| displayed.contains(index) || prefetch.contains(index));

        let to_load: Vec<(usize, PathBuf)> = displayed
            .iter()
            .filter(|&&index| !self.textures.contains_key(&index) && !self.failed.contains(&index))
            .filter_map(|&index| self.page_path(index).map(|path| (index, path)))
            .collect();
        if !to_load.is_empty() {
            self.pending.extend(to_load.iter().map(|(index, _)| *index));
            if channels.send(BookCommand::LoadPages { pages: to_load }).is_err() {
                log::error!("Image worker is not running");
            }
        }

        let to_prefetch: Vec<(usize, PathBuf)> = prefetch
            .iter()
            .filter(|&&index| !self.textures.contains_key(&index))
            .filter_map(|&index| self.page_path(index).map(|path| (index, path)))
            .collect();
        if !to_prefetch.is_empty()
            && channels
                .send(BookCommand::PrefetchPages { pages: to_prefetch })
                .is_err()
        {
            log::error!("Image worker is not running");
        }
    }

    pub fn on_page_loaded(
        &mut self,
        ctx: &egui::Context,
        page_index: usize,
        width: usize,
        height: usize,
        rgba_data: &[u8],
    ) {
        if !self.pending.remove(&page_index) {
            return;
        }
        let color_image = egui::ColorImage::from_rgba_unmultiplied([width, height], rgba_data);
        let texture = ctx.load_texture(
            format!("page_{page_index}"),
            color_image,
            egui::TextureOptions::LINEAR,
        );
        self.textures.insert(page_index, texture);
    }

    /// Remember pages the worker could not load so they are not requested again
    pub fn on_page_failed(&mut self, page_index: usize) {
        self.pending.remove(&page_index);
        self.failed.insert(page_index);
    }

    /// Submit the page-number field
    pub fn submit_page_input(&mut self) {
        self.engine.jump_to(self.page_input.as_str());
        // Rewrite the field even when the jump landed on the same spread
        self.page_input = self.engine.display_page_number().to_string();
    }
}

/// Page indices occupying the visible slots
#[derive(Debug, PartialEq)]
enum Slots {
    Single(Option<usize>),
    Pair(Option<usize>, Option<usize>),
}

impl Slots {
    fn for_engine(engine: &Engine<Rc<ViewportMode>>) -> Self {
        let displayed = engine.displayed_indices();
        match engine.state().mode {
            LayoutMode::Single => Slots::Single(displayed.first().copied()),
            LayoutMode::Spread => match engine.boundary() {
                Boundary::First => Slots::Pair(None, displayed.first().copied()),
                Boundary::Last => Slots::Pair(displayed.first().copied(), None),
                Boundary::Middle => {
                    Slots::Pair(displayed.first().copied(), displayed.get(1).copied())
                }
            },
        }
    }
}

pub fn show_reader(ui: &mut egui::Ui, state: &mut ReaderState, channels: &WorkerChannels) {
    handle_keyboard(ui, state);

    let bounds = ui.available_rect_before_wrap();
    ui.allocate_rect(bounds, egui::Sense::hover());

    match Slots::for_engine(&state.engine) {
        Slots::Single(index) => {
            let response = ui.interact(bounds, ui.id().with("single_page"), egui::Sense::click());
            paint_page(ui, state, index, bounds, egui::Align2::CENTER_CENTER);
            if response.clicked() {
                // Left half goes back, right half goes forward
                let side = match response.interact_pointer_pos() {
                    Some(pos) if pos.x < bounds.center().x => Side::Left,
                    _ => Side::Right,
                };
                state.engine.click_zone(side);
            }
        }
        Slots::Pair(left_index, right_index) => {
            let spine = bounds.center().x;
            let left_half = egui::Rect::from_min_max(bounds.min, egui::pos2(spine, bounds.max.y));
            let right_half = egui::Rect::from_min_max(egui::pos2(spine, bounds.min.y), bounds.max);

            // Pages lean against the spine; a hidden slot stays blank
            paint_page(ui, state, left_index, left_half, egui::Align2::RIGHT_CENTER);
            paint_page(ui, state, right_index, right_half, egui::Align2::LEFT_CENTER);

            let left_click = ui.interact(left_half, ui.id().with("left_page"), egui::Sense::click());
            let right_click =
                ui.interact(right_half, ui.id().with("right_page"), egui::Sense::click());
            if left_click.clicked() {
                state.engine.click_zone(Side::Left);
            } else if right_click.clicked() {
                state.engine.click_zone(Side::Right);
            }
        }
    }

    state.sync(channels);
}

fn handle_keyboard(ui: &egui::Ui, state: &mut ReaderState) {
    // Arrow keys flip spreads on wide layouts only, and never while typing
    if state.page_input_focused || state.engine.state().mode != LayoutMode::Spread {
        return;
    }
    let (back, forward) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::ArrowLeft),
            i.key_pressed(egui::Key::ArrowRight),
        )
    });
    if back {
        state.engine.click_zone(Side::Left);
    } else if forward {
        state.engine.click_zone(Side::Right);
    }
}

fn paint_page(
    ui: &egui::Ui,
    state: &ReaderState,
    page_index: Option<usize>,
    bounds: egui::Rect,
    align: egui::Align2,
) {
    let Some(page_index) = page_index else {
        return;
    };

    if let Some(texture) = state.textures.get(&page_index) {
        let rect = fit_rect(bounds, texture.size_vec2(), align);
        ui.painter().image(
            texture.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    } else if state.failed.contains(&page_index) {
        ui.painter().text(
            bounds.center(),
            egui::Align2::CENTER_CENTER,
            format!("Page {} unavailable", page_index + 1),
            egui::FontId::proportional(16.0),
            ui.visuals().weak_text_color(),
        );
    } else {
        let spinner = egui::Rect::from_center_size(bounds.center(), egui::vec2(24.0, 24.0));
        egui::Spinner::new().paint_at(ui, spinner);
        ui.ctx().request_repaint();
    }
}

/// Largest rect with the image's aspect ratio that fits `bounds`
pub fn fit_rect(bounds: egui::Rect, image_size: egui::Vec2, align: egui::Align2) -> egui::Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.width() / image_size.x).min(bounds.height() / image_size.y);
    align.align_size_within_rect(image_size * scale, bounds)
}
