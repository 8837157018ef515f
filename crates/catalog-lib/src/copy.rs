//! Label swap shown on a copyable base URL after it lands in the clipboard.

pub const BASE_URL_CLASS: &str = "base-url";
pub const COPY_CONFIRMATION: &str = "Copied to clipboard!";
pub const COPY_CONFIRMATION_COLOR: &str = "#10b981";
pub const COPY_REVERT_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    original: String,
}

impl CopyFeedback {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            original: text.into(),
        }
    }

    /// Exactly what goes to the clipboard
    pub fn payload(&self) -> &str {
        &self.original
    }

    pub fn label(&self, elapsed_ms: u32) -> &str {
        if elapsed_ms < COPY_REVERT_MS {
            COPY_CONFIRMATION
        } else {
            &self.original
        }
    }

    // The page keeps the confirmation color after reverting too.
    pub fn color(&self, _elapsed_ms: u32) -> &'static str {
        COPY_CONFIRMATION_COLOR
    }
}
