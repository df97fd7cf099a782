use eframe::egui;
use photobook_runtime::{BookCommand, BookUpdate, WorkerChannels};
use std::path::PathBuf;

use crate::logger::AppLogger;
use crate::views::{ReaderState, show_bookmarks, show_page_counter, show_reader};

/// Width used before the first frame reports the real one
const INITIAL_WIDTH_PX: f32 = 1280.0;

pub struct PhotoBookApp {
    // Async infrastructure
    channels: WorkerChannels,

    // Reader state, present while a book is open
    reader: Option<ReaderState>,
    viewport_width: f32,

    logger: AppLogger,
    show_log: bool,

    _tokio_handle: tokio::runtime::Handle,
}

impl PhotoBookApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
        config_path: Option<PathBuf>,
    ) -> Self {
        let (channels, command_rx, update_tx) = photobook_runtime::channels();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        let mut app = Self {
            channels,
            reader: None,
            viewport_width: INITIAL_WIDTH_PX,
            logger,
            show_log: false,
            _tokio_handle: tokio_handle,
        };
        if let Some(config_path) = config_path {
            app.open_book(config_path);
        }
        app
    }

    fn send(&mut self, command: BookCommand) {
        if let Err(e) = self.channels.send(command) {
            log::error!("Failed to reach worker: {e}");
        }
    }

    fn open_book(&mut self, config_path: PathBuf) {
        log::info!("Opening {}...", config_path.display());
        self.send(BookCommand::OpenBook { config_path });
    }

    fn open_default_book(&mut self) {
        match std::env::current_dir() {
            Ok(base_dir) => {
                log::info!("Opening default book...");
                self.send(BookCommand::OpenDefaultBook { base_dir });
            }
            Err(e) => log::error!("Cannot resolve working directory: {e}"),
        }
    }

    fn process_updates(&mut self, ctx: &egui::Context) {
        while let Some(update) = self.channels.try_recv() {
            match update {
                BookUpdate::BookOpened {
                    options,
                    stats,
                    base_dir,
                } => {
                    match ReaderState::open(options, stats, base_dir, self.viewport_width) {
                        Ok(reader) => self.reader = Some(reader),
                        Err(e) => log::error!("Cannot open reader: {e}"),
                    }
                }
                BookUpdate::PageLoaded {
                    page_index,
                    width,
                    height,
                    rgba_data,
                } => {
                    if let Some(reader) = &mut self.reader {
                        reader.on_page_loaded(ctx, page_index, width, height, &rgba_data);
                    }
                }
                // The worker has already logged the failure
                BookUpdate::PageFailed { page_index, .. } => {
                    if let Some(reader) = &mut self.reader {
                        reader.on_page_failed(page_index);
                    }
                }
                BookUpdate::BookClosed => {
                    self.reader = None;
                }
                // Logged by the worker, so it already shows in the status bar
                BookUpdate::Error { .. } => {}
            }
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("📂 Open book…").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Book config", &["json"])
                    .pick_file()
                {
                    self.open_book(path);
                }
            }
            if ui.button("📖 Default book").clicked() {
                self.open_default_book();
            }
            if ui
                .add_enabled(self.reader.is_some(), egui::Button::new("Close"))
                .clicked()
            {
                self.send(BookCommand::CloseBook);
            }

            ui.separator();
            ui.toggle_value(&mut self.show_log, "Log");

            if let Some(reader) = &self.reader {
                ui.separator();
                ui.label(format!(
                    "{} pages, {} bookmarks",
                    reader.stats.pages, reader.stats.bookmarks
                ));
            }
        });
    }

    fn show_log_window(&mut self, ctx: &egui::Context) {
        let logger = &self.logger;
        egui::Window::new("Log")
            .open(&mut self.show_log)
            .default_size([640.0, 320.0])
            .show(ctx, |ui| {
                if ui.button("Clear").clicked() {
                    logger.clear();
                }
                ui.separator();
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in logger.get_entries() {
                            ui.monospace(entry.format_line());
                        }
                    });
            });
    }
}

impl eframe::App for PhotoBookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle drag-and-drop for book configs
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
                .collect()
        });
        if let Some(path) = dropped.into_iter().next() {
            self.open_book(path);
        }

        // Layout mode follows the window width
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.viewport_width = rect.width();
        }
        if let Some(reader) = &self.reader {
            reader.viewport.set_width(self.viewport_width);
        }

        self.process_updates(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| self.show_menu(ui));

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            // Latest info-or-worse log line doubles as the status
            ui.label(self.logger.latest_status().unwrap_or_default());
        });

        if let Some(reader) = &mut self.reader {
            egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
                show_page_counter(ui, reader);
                show_bookmarks(ui, reader);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| match &mut self.reader {
            Some(reader) => show_reader(ui, reader, &self.channels),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("Open a book config or drop one here");
                });
            }
        });

        if self.show_log {
            self.show_log_window(ctx);
        }
    }
}
