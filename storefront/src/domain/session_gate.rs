//! Profile-gated navigation between onboarding, home, and profile screens.
//!
//! # Navigation graph
//!
//! ```text
//!   Onboarding ──register──► Home ──► Profile
//!       ▲                     ▲          │
//!       │                     └──back────┤
//!       └──────────logout────────────────┘
//! ```
//!
//! The initial screen is decided once per session from the profile store.
//! Every transition that touches the store performs the store call first and
//! only moves state when that call succeeds.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::ports::{ProfileStore, ProfileStoreError};
use super::profile::{Profile, ProfileValidationError, StoredProfile};

/// Screens the session can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Onboarding,
    Home,
    Profile,
}

impl Destination {
    /// Stable route name.
    pub const fn route(self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::Home => "home",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// How a legal transition is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Needs validated registration data written to the store.
    Registration,
    /// Plain navigation with no store access.
    Navigation,
    /// Clears the store before leaving.
    Logout,
}

/// Every legal transition. Anything absent is rejected.
pub const TRANSITIONS: &[(Destination, Destination, TransitionKind)] = &[
    (
        Destination::Onboarding,
        Destination::Home,
        TransitionKind::Registration,
    ),
    (
        Destination::Home,
        Destination::Profile,
        TransitionKind::Navigation,
    ),
    (
        Destination::Profile,
        Destination::Home,
        TransitionKind::Navigation,
    ),
    (
        Destination::Profile,
        Destination::Onboarding,
        TransitionKind::Logout,
    ),
];

/// Look up the transition from `from` to `to`.
pub fn transition_kind(from: Destination, to: Destination) -> Option<TransitionKind> {
    TRANSITIONS
        .iter()
        .find(|(source, target, _)| *source == from && *target == to)
        .map(|(_, _, kind)| *kind)
}

/// Recoverable failures reported by the session gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Registration data had blank fields; nothing was written.
    #[error(transparent)]
    Validation(#[from] ProfileValidationError),
    /// The requested transition is not defined for the current screen.
    #[error("cannot navigate from {from} to {to}")]
    InvalidTransition { from: Destination, to: Destination },
    /// The profile store failed; state is unchanged.
    #[error(transparent)]
    Store(#[from] ProfileStoreError),
}

/// Compute the first screen of a session from the store.
///
/// `Home` when the store holds a non-blank email, otherwise `Onboarding`.
pub fn initial_destination<S>(store: &S) -> Result<Destination, SessionError>
where
    S: ProfileStore + ?Sized,
{
    let stored = store.read_profile()?;
    Ok(if stored.as_ref().is_some_and(StoredProfile::is_complete) {
        Destination::Home
    } else {
        Destination::Onboarding
    })
}

/// Single source of truth for the current screen.
///
/// # Examples
/// ```
/// use storefront::domain::{Destination, SessionGate};
/// use storefront::outbound::InMemoryProfileStore;
///
/// let mut gate = SessionGate::start(InMemoryProfileStore::new()).expect("store readable");
/// assert_eq!(gate.current_destination(), Destination::Onboarding);
///
/// gate.register("Jane", "Doe", "jane@example.com").expect("registration");
/// assert_eq!(gate.current_destination(), Destination::Home);
/// ```
#[derive(Debug)]
pub struct SessionGate<S> {
    store: S,
    current: Destination,
}

impl<S: ProfileStore> SessionGate<S> {
    /// Start a session, reading the store once to pick the first screen.
    pub fn start(store: S) -> Result<Self, SessionError> {
        let current = initial_destination(&store)?;
        info!(destination = %current, "session started");
        Ok(Self { store, current })
    }

    pub fn current_destination(&self) -> Destination {
        self.current
    }

    /// Targets reachable from the current screen, in table order.
    pub fn available_destinations(&self) -> Vec<Destination> {
        TRANSITIONS
            .iter()
            .filter(|(source, _, _)| *source == self.current)
            .map(|(_, target, _)| *target)
            .collect()
    }

    /// Validate the onboarding form, persist it, and move to `Home`.
    ///
    /// Only legal from `Onboarding`. Blank fields are reported without
    /// touching the store, and a failed write leaves the session on
    /// `Onboarding`.
    pub fn register(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Destination, SessionError> {
        self.ensure_transition(Destination::Home, TransitionKind::Registration)?;

        let profile = Profile::new(first_name, last_name, email).inspect_err(|err| {
            warn!(blank_fields = ?err.blank_fields(), "registration rejected");
        })?;
        self.store.write_profile(&profile).inspect_err(|err| {
            warn!(error = %err, "registration write failed");
        })?;

        Ok(self.move_to(Destination::Home))
    }

    /// Clear the stored profile and return to `Onboarding`.
    ///
    /// Only legal from `Profile`. A failed clear leaves the session on
    /// `Profile` so a restart still sees the old profile consistently.
    pub fn logout(&mut self) -> Result<Destination, SessionError> {
        self.ensure_transition(Destination::Onboarding, TransitionKind::Logout)?;

        self.store.clear_profile().inspect_err(|err| {
            warn!(error = %err, "logout clear failed");
        })?;

        Ok(self.move_to(Destination::Onboarding))
    }

    /// Request a move to `to`.
    ///
    /// Plain navigation moves immediately and a logout edge delegates to
    /// [`Self::logout`]. The registration edge cannot be taken without form
    /// data, so it is rejected here; use [`Self::register`].
    pub fn navigate(&mut self, to: Destination) -> Result<Destination, SessionError> {
        match transition_kind(self.current, to) {
            Some(TransitionKind::Navigation) => Ok(self.move_to(to)),
            Some(TransitionKind::Logout) => self.logout(),
            Some(TransitionKind::Registration) | None => Err(self.reject(to)),
        }
    }

    /// Read the stored profile for display on the profile screen.
    pub fn stored_profile(&self) -> Result<Option<StoredProfile>, SessionError> {
        Ok(self.store.read_profile()?)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// End the session and hand back the store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn ensure_transition(
        &self,
        to: Destination,
        expected: TransitionKind,
    ) -> Result<(), SessionError> {
        if transition_kind(self.current, to) == Some(expected) {
            Ok(())
        } else {
            Err(self.reject(to))
        }
    }

    fn reject(&self, to: Destination) -> SessionError {
        warn!(from = %self.current, to = %to, "transition rejected");
        SessionError::InvalidTransition {
            from: self.current,
            to,
        }
    }

    fn move_to(&mut self, to: Destination) -> Destination {
        info!(from = %self.current, to = %to, "navigated");
        self.current = to;
        to
    }
}

#[cfg(test)]
mod tests;
