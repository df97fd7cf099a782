//! Shared constants for the photo book reader
//!
//! Defaults for the page naming scheme, layout breakpoint and image
//! prefetching live here so the core and both front-ends agree on them.

// =============================================================================
// Page Set
// =============================================================================

/// Number of pages in the default book
pub const DEFAULT_PAGE_COUNT: usize = 132;

/// Directory holding the page images
pub const DEFAULT_IMAGE_DIRECTORY: &str = "images";

/// File name prefix shared by all page images
pub const DEFAULT_IMAGE_PREFIX: &str = "photo";

/// Largest book the reader will open
pub const MAX_PAGE_COUNT: usize = 10_000;

/// Number used for the first page image
pub const DEFAULT_FIRST_NUMBER: usize = 0;

/// Zero-padded width of the page number in file names (photo007.jpg)
pub const DEFAULT_NUMBER_DIGITS: usize = 3;

/// Widest zero padding accepted (digits in `u64::MAX`)
pub const MAX_NUMBER_DIGITS: usize = 20;

/// Image file extension
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

// =============================================================================
// Layout
// =============================================================================

/// Viewports at or below this width (logical pixels) use single-page mode
pub const SINGLE_MODE_BREAKPOINT_PX: f32 = 768.0;

// =============================================================================
// Prefetching
// =============================================================================

/// Neighbouring positions to warm in each direction
pub const DEFAULT_PREFETCH_RADIUS: usize = 2;
