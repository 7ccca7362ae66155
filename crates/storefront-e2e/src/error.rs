// Error types for the suite

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the storefront UI
#[derive(Debug, Error)]
pub enum Error {
    /// The condition was not satisfied before the deadline
    ///
    /// Carries the selector (or condition description) that was being polled
    /// and the timeout budget that elapsed. The element may exist in the DOM
    /// but never reached the required state (visible, clickable, gone).
    #[error("timed out after {timeout_ms}ms waiting on '{subject}'")]
    Timeout { subject: String, timeout_ms: u64 },

    /// The locator matched no element in the DOM within the wait budget
    #[error("element not found: '{0}'")]
    NotFound(String),

    /// Element matched but is disabled, hidden, or obstructed
    #[error("element '{0}' is not interactable")]
    NotInteractable(String),

    /// Element handle is no longer attached to the current DOM
    ///
    /// Handles are never cached across calls; re-resolving the locator
    /// is the only recovery.
    #[error("stale element handle for '{0}'")]
    Stale(String),

    /// Deselect requested on a single-select control
    #[error("'{0}' is not a multi-select control")]
    NotMultiple(String),

    /// No alert dialog is currently open
    #[error("no alert present")]
    NoAlert,

    /// Underlying WebDriver error (protocol, session, navigation)
    #[error(transparent)]
    Driver(#[from] thirtyfour::error::WebDriverError),

    /// I/O error (screenshot files, test-data files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error (test-data files)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Named profile missing from the test-data file
    #[error("unknown test-data profile '{0}'")]
    UnknownProfile(String),

    /// Screen precondition failed: the expected screen is not active
    ///
    /// Raised when a screen's landmark element cannot be found before
    /// acting on it, instead of letting actions silently no-op against
    /// whatever screen happens to be loaded.
    #[error("expected the {screen} screen but landmark '{landmark}' is not present")]
    WrongScreen { screen: &'static str, landmark: String },
}
