//! Inbound adapters that drive the domain.
//!
//! The console adapter in [`cli`] plays the role of the presentation layer:
//! it feeds user input to the catalogue filter and the session gate and
//! renders their derived state as text.

pub mod cli;
