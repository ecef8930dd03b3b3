//! Domain primitives and state machines.
//!
//! Purpose: hold the storefront's business rules free of any I/O. Adapters
//! reach storage only through the traits in [`ports`].
//!
//! Public surface:
//! - `MenuRecord`, `Category`, `Price`: validated catalogue entries.
//! - `CatalogFilter`: search phrase plus toggleable category over a menu.
//! - `Profile`, `StoredProfile`: onboarding data, validated and as stored.
//! - `SessionGate`, `Destination`: profile-gated navigation.
//! - `Feedback`: outcome payload for the presentation layer.

pub mod catalog_filter;
pub mod feedback;
pub mod menu;
pub mod ports;
pub mod profile;
pub mod session_gate;

pub use self::catalog_filter::{CatalogFilter, CatalogQuery};
pub use self::feedback::{Feedback, FeedbackCode};
pub use self::menu::{Category, MenuItemId, MenuRecord, MenuRecordDraft, MenuValidationError, Price};
pub use self::profile::{
    Profile, ProfileField, ProfileValidationError, REGISTRATION_FAILURE_MESSAGE,
    REGISTRATION_SUCCESS_MESSAGE, StoredProfile,
};
pub use self::session_gate::{
    Destination, SessionError, SessionGate, TRANSITIONS, TransitionKind, initial_destination,
    transition_kind,
};
