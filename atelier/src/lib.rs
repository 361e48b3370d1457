//! Atelier core - Rust business logic for a trilingual design-studio
//! portfolio site.
//!
//! Two subsystems live here: locale resolution with static dictionaries
//! (`i18n`), and the project CRUD synchronizer (`store`) that mediates
//! between in-memory surface state and the hosted document store / object
//! storage behind the traits in `backend`.
//!
//! Rendering, routing, transport, and provider SDK internals stay behind the
//! collaborator traits in `backend`, `auth`, and `prefs`.

pub mod auth;
pub mod backend;
pub mod fixtures;
pub mod i18n;
pub mod interface;
pub mod models;
pub mod prefs;
mod store;
mod translations;

pub use interface::*;
pub use store::{EditSession, PortfolioStore, SessionState};
