//! Little Lemon storefront core.
//!
//! Two components sit behind the presentation layer:
//! [`domain::CatalogFilter`] narrows the menu by search phrase and category,
//! and [`domain::SessionGate`] decides which screen a session shows based on
//! the stored onboarding profile.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod telemetry;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
