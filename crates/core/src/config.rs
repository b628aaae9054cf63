//! Fixed settings shared by the picker and the dispatcher.

/// Executable every listing and action invocation runs.
pub const KUBECTL: &str = "kubectl";

/// Namespace used when none is given on the command line.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Number of candidate rows shown per page.
pub const PAGE_SIZE: usize = 15;

/// Marker line shown above or below a page when more rows exist in that direction.
pub const ELLIPSIS: &str = "  ...";

/// Leading glyph of the row under the cursor.
pub const CURSOR_GLYPH: char = '>';

/// Verb whose invocation addresses the selection by name alone.
pub const LOGS_ACTION: &str = "logs";

/// Verbs that need the caller's terminal attached (full-screen editors).
pub const INTERACTIVE_ACTIONS: &[&str] = &["edit"];
