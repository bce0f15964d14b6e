//! Load-state container for a single fetch slot.

pub use crate::error::ErrorKind;

/// Where a slot is in its request lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight and the UI should show a spinner.
    Loading,
    /// The last applied response succeeded.
    Loaded,
    /// The last applied response failed. Any previous value is still held.
    Failed,
}

/// A value plus the status of the request that produces it.
///
/// A successful response fully replaces the held value. A failure keeps it, so
/// a UI can keep rendering stale data next to an error badge.
#[derive(Debug, Clone, PartialEq)]
pub struct Loadable<T> {
    status: LoadStatus,
    value: Option<T>,
    error: Option<ErrorKind>,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            status: LoadStatus::Idle,
            value: None,
            error: None,
        }
    }
}

impl<T> Loadable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a request as started and raise the spinner.
    pub fn start(&mut self) {
        self.status = LoadStatus::Loading;
        self.error = None;
    }

    /// Raise the spinner only when nothing is held yet.
    ///
    /// Returns whether the status changed to `Loading`.
    pub fn start_if_empty(&mut self) -> bool {
        if self.value.is_none() {
            self.start();
            true
        } else {
            false
        }
    }

    /// Apply a successful response.
    pub fn resolve(&mut self, value: T) {
        self.value = Some(value);
        self.status = LoadStatus::Loaded;
        self.error = None;
    }

    /// Apply a failed response, keeping the previous value.
    pub fn fail(&mut self, kind: ErrorKind) {
        self.status = LoadStatus::Failed;
        self.error = Some(kind);
    }

    /// Drop the value and go back to `Idle`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }
}
