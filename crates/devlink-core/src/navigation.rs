//! Client-side navigation seam.

/// Landing page after a successful profile mutation.
pub const DASHBOARD: &str = "/dashboard";
/// Where the route guard sends signed-out users.
pub const LOGIN: &str = "/login";

/// Something that can move the client to another route.
pub trait Navigate {
    fn push(&mut self, path: &str);
}

/// In-memory route history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently pushed route.
    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Navigate for History {
    fn push(&mut self, path: &str) {
        tracing::debug!(path, "navigate");
        self.entries.push(path.to_string());
    }
}
