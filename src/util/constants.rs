// SentiScope - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SentiScope";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "SentiScope";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Language detection
// =============================================================================

/// First code point of the Arabic Unicode block.
pub const ARABIC_BLOCK_START: char = '\u{0600}';

/// Last code point of the Arabic Unicode block.
pub const ARABIC_BLOCK_END: char = '\u{06FF}';

// =============================================================================
// Loading limits
// =============================================================================

/// Hard upper bound on the number of review rows held in memory at once.
///
/// Rows beyond the cap are dropped at load time and counted in the load
/// summary so the user knows the table was truncated. At well under 1 KB per
/// review this keeps heap usage bounded even for pathological inputs.
pub const MAX_DATASET_ROWS: usize = 1_000_000;

// =============================================================================
// Chart defaults
// =============================================================================

/// Default cap on the number of equal-width bins in the length histogram.
pub const DEFAULT_MAX_BINS: usize = 30;

/// Minimum user-configurable histogram bin cap.
pub const MIN_MAX_BINS: usize = 1;

/// Maximum user-configurable histogram bin cap.
pub const ABSOLUTE_MAX_BINS: usize = 200;

// =============================================================================
// UI defaults
// =============================================================================

/// Default number of reviews shown per table page.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Minimum user-configurable table page size.
pub const MIN_PAGE_SIZE: usize = 5;

/// Maximum user-configurable table page size.
pub const MAX_PAGE_SIZE: usize = 500;

/// Characters of review text shown per table row before truncation.
/// The full text is always available in the detail pane.
pub const TABLE_PREVIEW_CHARS: usize = 120;

// =============================================================================
// Export
// =============================================================================

/// Maximum number of reviews that can be exported in a single operation.
pub const MAX_EXPORT_ROWS: usize = 1_000_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
