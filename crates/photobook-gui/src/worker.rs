use photobook_runtime::{BookCommand, BookUpdate};
use tokio::sync::mpsc;

use crate::handlers;
use crate::image_cache::PageCache;

/// Async worker task that loads books and page images and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<BookCommand>,
    update_tx: mpsc::UnboundedSender<BookUpdate>,
) {
    let mut cache = PageCache::new();

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut cache, &mut command_rx, &update_tx).await;
    }
}

async fn process_command(
    cmd: BookCommand,
    cache: &mut PageCache,
    command_rx: &mut mpsc::UnboundedReceiver<BookCommand>,
    update_tx: &mpsc::UnboundedSender<BookUpdate>,
) {
    match cmd {
        BookCommand::OpenBook { config_path } => {
            handlers::book::handle_open_book(config_path, cache, update_tx).await;
        }
        BookCommand::OpenDefaultBook { base_dir } => {
            handlers::book::handle_open_default(base_dir, cache, update_tx).await;
        }
        BookCommand::LoadPages { mut pages } => {
            // Only the latest spread matters when the reader flips quickly
            while let Ok(next_cmd) = command_rx.try_recv() {
                match next_cmd {
                    BookCommand::LoadPages { pages: newer } => {
                        log::debug!("Discarding queued page load, using newer request");
                        pages = newer;
                    }
                    BookCommand::PrefetchPages { .. } => {
                        log::debug!("Discarding prefetch during page navigation");
                    }
                    other => {
                        // Can't put it back, so handle it before the load
                        Box::pin(process_command(other, cache, command_rx, update_tx)).await;
                    }
                }
            }

            handlers::pages::handle_load_pages(pages, cache, update_tx).await;
        }
        BookCommand::PrefetchPages { pages } => {
            handlers::pages::handle_prefetch_pages(pages, cache).await;
        }
        BookCommand::CloseBook => {
            handlers::book::handle_close(cache, update_tx).await;
        }
    }
}
