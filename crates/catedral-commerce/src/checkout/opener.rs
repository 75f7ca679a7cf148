//! Boundary for launching external applications.

use serde::Serialize;
use thiserror::Error;

/// Notice shown to the user when the messaging application cannot be opened.
pub const FAILURE_NOTICE: &str = "Não foi possível abrir o WhatsApp";

/// Why an external URI could not be opened.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum OpenError {
    /// No handler is installed for the URI.
    #[error("No application available to open {0}")]
    Unavailable(String),

    /// The handler was found but reported a failure.
    #[error("Failed to open external application: {0}")]
    Failed(String),
}

/// Capability to hand a URI to an external handler.
///
/// This is the only I/O the storefront performs. Implementations report
/// whether the handler accepted the URI; they never retry.
pub trait ExternalOpener {
    /// Attempt to open `uri` in an external application.
    fn open(&self, uri: &str) -> Result<(), OpenError>;
}

impl<F> ExternalOpener for F
where
    F: Fn(&str) -> Result<(), OpenError>,
{
    fn open(&self, uri: &str) -> Result<(), OpenError> {
        self(uri)
    }
}
