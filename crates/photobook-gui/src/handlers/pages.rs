use photobook_runtime::BookUpdate;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

use crate::image_cache::{CachedPage, PageCache};

/// Decode one page image into RGBA pixels
fn decode_page(path: &Path) -> Result<CachedPage, image::ImageError> {
    let rgba = image::open(path)?.to_rgba8();
    let width = rgba.width() as usize;
    let height = rgba.height() as usize;
    Ok(CachedPage {
        rgba_data: rgba.into_raw(),
        width,
        height,
    })
}

async fn load_into_cache(
    page_index: usize,
    path: PathBuf,
    cache: &mut PageCache,
) -> Result<(), String> {
    if cache.contains(page_index) {
        return Ok(());
    }

    let display_path = path.display().to_string();
    match tokio::task::spawn_blocking(move || decode_page(&path)).await {
        Ok(Ok(page)) => {
            cache.insert(page_index, page);
            Ok(())
        }
        Ok(Err(e)) => Err(format!("Failed to load {}: {}", display_path, e)),
        Err(e) => Err(format!("Task join error: {}", e)),
    }
}

pub async fn handle_load_pages(
    pages: Vec<(usize, PathBuf)>,
    cache: &mut PageCache,
    update_tx: &mpsc::UnboundedSender<BookUpdate>,
) {
    for (page_index, path) in pages {
        if let Err(message) = load_into_cache(page_index, path, cache).await {
            log::warn!("{}", message);
            let _ = update_tx.send(BookUpdate::PageFailed {
                page_index,
                message,
            });
            continue;
        }

        if let Some(cached) = cache.get(page_index) {
            let _ = update_tx.send(BookUpdate::PageLoaded {
                page_index,
                width: cached.width,
                height: cached.height,
                rgba_data: cached.rgba_data.clone(),
            });
        }
    }
}

/// Prefetch pages into cache without sending updates to UI
pub async fn handle_prefetch_pages(pages: Vec<(usize, PathBuf)>, cache: &mut PageCache) {
    for (page_index, path) in pages {
        match load_into_cache(page_index, path, cache).await {
            Ok(()) => log::debug!("Prefetched page {} into cache", page_index),
            Err(message) => log::debug!("Prefetch skipped: {}", message),
        }
    }
}
