use serde::Serialize;

/// Request-lifecycle flags carried by every slice.
///
/// At most one of loading, error and success is set at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lifecycle {
    pub is_loading: bool,
    pub error: Option<String>,
    pub success: bool,
}

impl Lifecycle {
    /// A new operation started; earlier outcomes no longer apply
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
        self.success = false;
    }

    pub fn fulfil(&mut self, success: bool) {
        self.is_loading = false;
        self.error = None;
        self.success = success;
    }

    pub fn reject(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.error = Some(message.into());
        self.success = false;
    }

    /// Clear all flags once the outcome has been shown to the user
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_idle(&self) -> bool {
        !self.is_loading && self.error.is_none() && !self.success
    }
}
