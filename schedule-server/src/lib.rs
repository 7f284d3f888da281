//! Bus travel schedule lookup and creation.
//!
//! Resolves station codes, validates search-date windows, lists available
//! schedules between two stations, and creates new schedule records.
//! Persistence is an injected collaborator; see the [`store`] traits.

pub mod clock;
pub mod domain;
pub mod schedules;
pub mod store;
