//! Ledger module (in-memory accounts, password-gated balance mutation).
//!
//! Pure domain logic + synchronization only: no IO, no HTTP, no persistence
//! concerns.

pub mod account;
pub mod ledger;

pub use account::{Account, MutationRequest, User};
pub use ledger::Ledger;
