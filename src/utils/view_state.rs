/// Type-state machine for a single-entity page
///
/// Replaces a `loading: bool` plus an `Option<T>` with one enum so the page
/// can never be "loading" and "loaded" at the same time, and so a record is
/// either fully present or absent.
///
/// # Examples
///
/// ```
/// // Instead of:
/// let mut loading = use_signal(|| true);
/// let mut profile = use_signal(|| None);
///
/// // Use:
/// let mut state = use_signal(|| ViewState::Loading);
///
/// // On success:
/// state.set(ViewState::Loaded(profile));
///
/// // On any failure:
/// state.set(ViewState::NotFound);
/// ```

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Waiting for the fetch to settle
    Loading,

    /// The fetch settled without a usable record
    NotFound,

    /// The record is available
    Loaded(T),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

/// Every error collapses into NotFound
impl<T, E> From<Result<T, E>> for ViewState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => ViewState::Loaded(data),
            Err(_) => ViewState::NotFound,
        }
    }
}
