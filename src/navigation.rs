/// NavigationSurface
///
/// Defines the abstract contract between the shell and whatever actually moves
/// the user around. Any routing substrate exposing these primitives satisfies
/// it — a browser history binding in the real frontend, a logging stub in the
/// binary, an in-memory stack in tests.
///
/// The push/replace distinction is load-bearing: a denied navigation must
/// *replace* the entry the user just created, so pressing back afterwards
/// skips the disallowed route entirely.
pub trait NavigationSurface: Send {
    /// Records a user-initiated navigation as a new history entry.
    fn push(&mut self, path: &str);

    /// Overwrites the current history entry with `path`. Used exclusively for
    /// authorization redirects.
    fn replace(&mut self, path: &str);

    /// Mounts the named view for the current history entry.
    fn render(&mut self, view: &str);

    /// Scrolls the viewport back to the top.
    fn reset_scroll(&mut self);
}

/// TracingNavigator
///
/// The navigation surface used by the binary harness: every primitive is
/// logged through `tracing` and otherwise does nothing. Lets the full
/// startup/dispatch cycle run and be observed without any UI substrate.
#[derive(Debug, Default)]
pub struct TracingNavigator;

impl TracingNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl NavigationSurface for TracingNavigator {
    fn push(&mut self, path: &str) {
        tracing::info!(%path, "navigation: push");
    }

    fn replace(&mut self, path: &str) {
        tracing::info!(%path, "navigation: replace");
    }

    fn render(&mut self, view: &str) {
        tracing::info!(%view, "navigation: render");
    }

    fn reset_scroll(&mut self) {
        tracing::debug!("navigation: scroll reset");
    }
}

/// RecordingNavigator
///
/// An in-memory navigation surface used by the integration tests. It keeps a
/// real history stack so tests can assert the history-replacing redirect
/// property by driving `back()` like a user would.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    /// The history stack; the last element is the current entry.
    pub history: Vec<String>,
    /// Every view mounted, in order.
    pub rendered: Vec<String>,
    /// How many times the viewport scroll was reset.
    pub scroll_resets: usize,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The path of the current history entry, if any.
    pub fn current_path(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// The most recently mounted view, if any.
    pub fn current_view(&self) -> Option<&str> {
        self.rendered.last().map(String::as_str)
    }

    /// Simulates the user pressing "back": drops the current entry and
    /// returns the path it lands on.
    pub fn back(&mut self) -> Option<&str> {
        self.history.pop();
        self.current_path()
    }
}

impl NavigationSurface for RecordingNavigator {
    fn push(&mut self, path: &str) {
        self.history.push(path.to_string());
    }

    fn replace(&mut self, path: &str) {
        // Overwrite the current entry; an empty stack behaves like a push so
        // replacement is always well-defined.
        self.history.pop();
        self.history.push(path.to_string());
    }

    fn render(&mut self, view: &str) {
        self.rendered.push(view.to_string());
    }

    fn reset_scroll(&mut self) {
        self.scroll_resets += 1;
    }
}
