use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::mpsc;

// Re-export types from the core crate
pub use photobook_core::{BookOptions, BookStatistics};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum BookCommand {
    OpenBook {
        config_path: PathBuf,
    },
    /// Open the default book layout with images relative to `base_dir`
    OpenDefaultBook {
        base_dir: PathBuf,
    },
    /// Pages currently on screen
    LoadPages {
        pages: Vec<(usize, PathBuf)>,
    },
    /// Warm the cache for pages likely shown next (lower priority than direct loads)
    PrefetchPages {
        pages: Vec<(usize, PathBuf)>,
    },
    CloseBook,
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum BookUpdate {
    BookOpened {
        options: BookOptions,
        stats: BookStatistics,
        base_dir: PathBuf,
    },
    PageLoaded {
        page_index: usize,
        width: usize,
        height: usize,
        rgba_data: Vec<u8>,
    },
    PageFailed {
        page_index: usize,
        message: String,
    },
    BookClosed,
    Error {
        message: String,
    },
}

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("worker has shut down")]
    Disconnected,
}

/// UI-side handle to the worker channels
pub struct WorkerChannels {
    command_tx: mpsc::UnboundedSender<BookCommand>,
    update_rx: mpsc::UnboundedReceiver<BookUpdate>,
}

impl WorkerChannels {
    pub fn new(
        command_tx: mpsc::UnboundedSender<BookCommand>,
        update_rx: mpsc::UnboundedReceiver<BookUpdate>,
    ) -> Self {
        Self {
            command_tx,
            update_rx,
        }
    }

    pub fn send(&self, command: BookCommand) -> Result<(), ChannelError> {
        self.command_tx
            .send(command)
            .map_err(|_| ChannelError::Disconnected)
    }

    /// Next pending update, without waiting
    pub fn try_recv(&mut self) -> Option<BookUpdate> {
        self.update_rx.try_recv().ok()
    }
}

/// Create the paired channel ends for the UI and the worker
pub fn channels() -> (
    WorkerChannels,
    mpsc::UnboundedReceiver<BookCommand>,
    mpsc::UnboundedSender<BookUpdate>,
) {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    (
        WorkerChannels::new(command_tx, update_rx),
        command_rx,
        update_tx,
    )
}
