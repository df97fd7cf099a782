#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use log::LevelFilter;
use std::path::PathBuf;

mod app;
mod handlers;
mod image_cache;
mod logger;
mod views;
mod worker;

use logger::AppLogger;

fn main() -> anyhow::Result<()> {
    let logger = AppLogger::new(500, LevelFilter::Debug);
    logger.clone().init()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let _guard = runtime.enter();

    // Optional book config to open on start
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Photo Book"),
        ..Default::default()
    };

    let handle = runtime.handle().clone();
    eframe::run_native(
        "Photo Book",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::PhotoBookApp::new(
                cc, handle, logger, config_path,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}
