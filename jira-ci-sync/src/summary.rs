//! Outcome of a run, for printing.

/// What an action did.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Action name.
    pub action: &'static str,

    /// Issue the action acted on or created.
    pub issue_key: Option<String>,

    /// Variables appended to the CI environment file, in order.
    pub exported: Vec<(String, String)>,
}

impl RunSummary {
    /// Creates an empty summary for `action`.
    #[must_use]
    pub fn new(action: &'static str) -> Self {
        Self {
            action,
            ..Default::default()
        }
    }

    /// Records an exported variable.
    pub fn export(&mut self, key: &str, value: &str) {
        self.exported.push((key.to_string(), value.to_string()));
    }
}
