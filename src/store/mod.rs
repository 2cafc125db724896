//! In-memory storage
//!
//! Process-local stores standing in for a real database. Constructed once
//! at startup and injected into handlers through the application state;
//! all contents vanish on restart.
//!
//! Both stores are only touched from synchronous, non-suspending code
//! paths, so a plain `std::sync::RwLock` over each map is sufficient.

pub mod account_store;
pub mod profile_store;

pub use account_store::AccountStore;
pub use profile_store::{ProfileStore, RemoveProfileError};
