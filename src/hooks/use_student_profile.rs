//! use_student_profile hook - Fetch-and-display lifecycle for one student profile
//!
//! This hook encapsulates:
//! - One request per identifier, reissued only when the identifier changes
//! - Cancellation of the previous request when the identifier changes
//! - A sequence guard so a late response for an old identifier is dropped
//! - Collapsing every failure into the not-found state

use dioxus::core::Task;
use dioxus::prelude::*;
use std::rc::Rc;

use crate::config::ApiConfig;
use crate::services::student_profile::{
    ProfileFetchError, ProfileRecord, ProfileSource, StudentProfileApi,
};
use crate::utils::ViewState;

/// Handle for one fetch cycle, returned by [`ProfileLoader::begin`]
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    seq: u64,
    identifier: String,
}

impl FetchTicket {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// State machine behind the profile page
///
/// `Init -> Loading -> {Loaded, NotFound}`; only a new identifier re-enters
/// Loading, and only the most recent ticket may settle the state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileLoader {
    identifier: Option<String>,
    seq: u64,
    state: ViewState<ProfileRecord>,
}

impl ProfileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState<ProfileRecord> {
        &self.state
    }

    /// Start a fetch cycle for `identifier`
    ///
    /// Returns None when a cycle for the same identifier already exists.
    pub fn begin(&mut self, identifier: &str) -> Option<FetchTicket> {
        if self.identifier.as_deref() == Some(identifier) {
            return None;
        }

        self.seq = self.seq.wrapping_add(1);
        self.identifier = Some(identifier.to_string());
        self.state = ViewState::Loading;

        Some(FetchTicket {
            seq: self.seq,
            identifier: identifier.to_string(),
        })
    }

    /// Settle the cycle identified by `ticket`
    ///
    /// Returns false (and changes nothing) when the ticket is stale.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<ProfileRecord, ProfileFetchError>,
    ) -> bool {
        if ticket.seq != self.seq {
            log::debug!(
                "Discarding stale profile response for '{}' (seq {} != {})",
                ticket.identifier,
                ticket.seq,
                self.seq
            );
            return false;
        }

        match &outcome {
            Ok(_) => log::info!("Loaded student profile '{}'", ticket.identifier),
            Err(e) if e.is_transport() => {
                log::error!("Error fetching student profile '{}': {}", ticket.identifier, e)
            }
            Err(e) => log::warn!("Student profile '{}' unavailable: {}", ticket.identifier, e),
        }

        self.state = outcome.into();
        true
    }
}

/// Hook that loads the profile for `identifier` from the configured backend
///
/// # Example
/// ```rust
/// let profile = use_student_profile(id.clone());
///
/// match profile() {
///     ViewState::Loading => rsx! { Spinner {} },
///     ViewState::NotFound => rsx! { ProfileNotFound {} },
///     ViewState::Loaded(record) => rsx! { ProfileDetails { profile: record } },
/// }
/// ```
pub fn use_student_profile(identifier: String) -> Memo<ViewState<ProfileRecord>> {
    let source = use_hook(|| {
        let config = try_consume_context::<ApiConfig>().unwrap_or_default();
        Rc::new(StudentProfileApi::with_config(&config)) as Rc<dyn ProfileSource>
    });

    use_profile_from(identifier, source)
}

/// Same as [`use_student_profile`] but with an explicit profile source
pub fn use_profile_from(
    identifier: String,
    source: Rc<dyn ProfileSource>,
) -> Memo<ViewState<ProfileRecord>> {
    let mut loader = use_signal(ProfileLoader::new);
    let mut fetch_task = use_signal(|| None::<Task>);

    use_effect(use_reactive(&identifier, move |id| {
        let Some(ticket) = loader.write().begin(&id) else {
            return;
        };

        // Only the newest request is allowed to run
        if let Some(task) = fetch_task.write().take() {
            task.cancel();
        }

        let source = source.clone();
        let task = spawn(async move {
            let outcome = source.fetch_profile(ticket.identifier()).await;
            loader.write().resolve(ticket, outcome);
        });
        fetch_task.set(Some(task));
    }));

    use_drop(move || {
        if let Some(task) = fetch_task.read().as_ref() {
            task.cancel();
        }
    });

    use_memo(move || loader.read().state().clone())
}
