/*
[INPUT]:  Failure messages from fetch/submit/typeahead round trips
[OUTPUT]: Single-slot error banner state for the UI
[POS]:    Controller layer - user-visible error surface
[UPDATE]: When error presentation policy changes
*/

/// Holds at most one user-facing error message.
///
/// A new failure replaces the previous one; successful navigation and
/// fresh submissions clear it.
#[derive(Debug, Default)]
pub struct ErrorBanner {
    message: Option<String>,
}

impl ErrorBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
