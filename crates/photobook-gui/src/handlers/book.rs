use photobook_core::{BookOptions, calculate_statistics};
use photobook_runtime::BookUpdate;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

use crate::image_cache::PageCache;

pub async fn handle_open_book(
    config_path: PathBuf,
    cache: &mut PageCache,
    update_tx: &mpsc::UnboundedSender<BookUpdate>,
) {
    match BookOptions::load(&config_path).await {
        Ok(options) => {
            // Image paths in the config are relative to the config file
            let base_dir = config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            open_book(options, base_dir, cache, update_tx);
        }
        Err(e) => {
            log::warn!("Failed to load {}: {}", config_path.display(), e);
            let _ = update_tx.send(BookUpdate::Error {
                message: format!("Failed to load book config: {e}"),
            });
        }
    }
}

pub async fn handle_open_default(
    base_dir: PathBuf,
    cache: &mut PageCache,
    update_tx: &mpsc::UnboundedSender<BookUpdate>,
) {
    open_book(BookOptions::default(), base_dir, cache, update_tx);
}

fn open_book(
    options: BookOptions,
    base_dir: PathBuf,
    cache: &mut PageCache,
    update_tx: &mpsc::UnboundedSender<BookUpdate>,
) {
    match calculate_statistics(&options) {
        Ok(stats) => {
            cache.clear();
            log::info!(
                "Opened book with {} pages and {} bookmarks",
                stats.pages,
                stats.bookmarks
            );
            let _ = update_tx.send(BookUpdate::BookOpened {
                options,
                stats,
                base_dir,
            });
        }
        Err(e) => {
            log::warn!("Invalid book config: {}", e);
            let _ = update_tx.send(BookUpdate::Error {
                message: format!("Invalid book config: {e}"),
            });
        }
    }
}

pub async fn handle_close(cache: &mut PageCache, update_tx: &mpsc::UnboundedSender<BookUpdate>) {
    cache.clear();
    log::info!("Closed book");
    let _ = update_tx.send(BookUpdate::BookClosed);
}
