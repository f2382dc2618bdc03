// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display and platform directories)
pub const APP_NAME: &str = "Phospho";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "phospho";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".phospho";

// =============================================================================
// Environment Variables - Debug
// =============================================================================

/// Environment variable for debug mode
pub const ENV_DEBUG: &str = "PHOSPHO_DEBUG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "PHOSPHO_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "PHOSPHO_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "PHOSPHO_LOG";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8632;

// =============================================================================
// Environment Variables - Storage
// =============================================================================

/// Environment variable to override data directory
pub const ENV_DATA_DIR: &str = "PHOSPHO_DATA_DIR";

// =============================================================================
// SQLite Database
// =============================================================================

/// SQLite database filename
pub const SQLITE_DB_FILENAME: &str = "phospho.db";

/// SQLite connection pool max connections
pub const SQLITE_MAX_CONNECTIONS: u32 = 5;

/// SQLite busy timeout in seconds
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 30;

/// SQLite cache size (negative = KB, so -64000 = 64MB)
pub const SQLITE_CACHE_SIZE: &str = "-64000";

/// SQLite WAL auto-checkpoint threshold (pages, ~4MB at 1000)
pub const SQLITE_WAL_AUTOCHECKPOINT: &str = "1000";

/// WAL checkpoint interval in seconds (5 minutes)
pub const SQLITE_CHECKPOINT_INTERVAL_SECS: u64 = 300;

// =============================================================================
// Request Body Limits
// =============================================================================

/// Default body limit for general API requests (1 MB)
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Body limit for OTLP endpoints (64 MB - LLM traces carry full prompts and completions)
pub const OTLP_BODY_LIMIT: usize = 64 * 1024 * 1024;

// =============================================================================
// Organizations
// =============================================================================

/// Default organization ID used when no org header is present
pub const DEFAULT_ORG_ID: &str = "default";

/// Request header carrying the authenticated organization id,
/// injected by the upstream auth layer
pub const ORG_ID_HEADER: &str = "x-phospho-org-id";

/// Response header carrying the number of spans accepted by the pipeline
pub const ACCEPTED_SPANS_HEADER: &str = "x-phospho-accepted-spans";

// =============================================================================
// Attribute Reconstruction
// =============================================================================

/// Maximum sequence index accepted in a dotted attribute key.
/// Larger indices are treated as malformed to bound placeholder padding.
pub const ATTRIBUTE_MAX_SEQUENCE_INDEX: usize = 10_000;

// =============================================================================
// Shutdown
// =============================================================================

/// Graceful shutdown timeout in seconds (5 minutes)
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 300;
