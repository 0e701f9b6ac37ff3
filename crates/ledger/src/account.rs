//! Account types and the wire-facing value objects.
//!
//! Serde field names (`name`, `email`, `pass`, `balance`, `value`) are the
//! wire contract and must not be renamed.

use serde::{Deserialize, Serialize};

use tillbook_core::{DomainError, DomainResult};

/// Account holder identity. The email doubles as the account identifier and
/// is immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// One ledger entry: holder identity, plaintext password, current balance.
///
/// The password is compared byte-for-byte (case-sensitive). Storing and
/// echoing it in plaintext is the baseline contract inherited by this
/// service; hashed credentials + constant-time comparison are a hardening
/// opportunity that must not change the external behavior under test.
///
/// No invariant keeps the balance non-negative: overdraft is permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub user: User,
    pub pass: String,
    pub balance: f64,
}

impl Account {
    /// Check the supplied password against the stored one.
    pub fn verify_pass(&self, pass: &str) -> DomainResult<()> {
        if self.pass != pass {
            return Err(DomainError::forbidden());
        }
        Ok(())
    }
}

/// A transient withdraw/deposit instruction. Lives only for the duration of
/// one request; never stored.
///
/// `value` is expected to be non-negative; a negative value is not rejected
/// and inverts the operation's sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationRequest {
    pub email: String,
    pub pass: String,
    pub value: f64,
}
