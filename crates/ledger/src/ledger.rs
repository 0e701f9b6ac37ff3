//! The ledger aggregate: account map + per-account mutation guards.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex, RwLock};

use tillbook_core::{DomainError, DomainResult};

use crate::account::{Account, MutationRequest};

/// Direction of a guarded balance mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Withdraw,
    Deposit,
}

/// In-memory store of all accounts, keyed by email.
///
/// # Synchronization
/// Two layers, deliberately distinct:
/// - the outer `RwLock` guards the map structure itself, so an insertion
///   racing with a lookup is safe;
/// - each account carries its own `Mutex` that serializes balance mutation.
///
/// The `Arc` indirection is load-bearing: every caller resolving the same
/// email clones a handle to the *same* guard instance. A design that embeds
/// the lock in a by-value account copy would silently duplicate the guard and
/// defeat mutual exclusion.
///
/// The inner guard is only ever held for a password check plus one
/// read-modify-write, never across an await point.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: RwLock<HashMap<String, Arc<Mutex<Account>>>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new account keyed by its user's email, allocating the
    /// account's guard atomically with the entry.
    ///
    /// A second create for the same email is rejected with
    /// [`DomainError::Duplicate`]; the existing account (and its balance) is
    /// left untouched.
    pub fn create_account(&self, account: Account) -> DomainResult<Account> {
        let mut accounts = self.accounts.write().unwrap();
        match accounts.entry(account.user.email.clone()) {
            Entry::Occupied(_) => Err(DomainError::duplicate(account.user.email)),
            Entry::Vacant(slot) => {
                tracing::info!(email = %account.user.email, "account created");
                slot.insert(Arc::new(Mutex::new(account.clone())));
                Ok(account)
            }
        }
    }

    /// Validate credentials for an account. No side effect.
    ///
    /// Fails with [`DomainError::NotFound`] for an unknown email and
    /// [`DomainError::Forbidden`] for a password mismatch (byte-exact,
    /// case-sensitive comparison).
    pub fn authenticate(&self, email: &str, pass: &str) -> DomainResult<()> {
        let handle = self.resolve(email)?;
        let account = handle.lock().unwrap();
        account.verify_pass(pass)
    }

    /// Subtract `req.value` from the account balance. Overdraft is permitted.
    pub fn withdraw(&self, req: &MutationRequest) -> DomainResult<Account> {
        self.mutate(req, Direction::Withdraw)
    }

    /// Add `req.value` to the account balance.
    pub fn deposit(&self, req: &MutationRequest) -> DomainResult<Account> {
        self.mutate(req, Direction::Deposit)
    }

    /// Snapshot of the account stored under `email`, if any.
    pub fn account(&self, email: &str) -> Option<Account> {
        let handle = self.resolve(email).ok()?;
        let account = handle.lock().unwrap();
        Some(account.clone())
    }

    /// Guarded read-modify-write of one account's balance.
    ///
    /// The credential check runs to completion inside the critical section,
    /// before the mutation; a mismatch short-circuits with nothing changed.
    /// Guard release happens on every exit path when the `MutexGuard` drops.
    fn mutate(&self, req: &MutationRequest, direction: Direction) -> DomainResult<Account> {
        let handle = self.resolve(&req.email)?;

        let mut account = handle.lock().unwrap();
        account.verify_pass(&req.pass)?;

        match direction {
            Direction::Withdraw => account.balance -= req.value,
            Direction::Deposit => account.balance += req.value,
        }

        tracing::debug!(
            email = %req.email,
            value = req.value,
            balance = account.balance,
            "balance mutated"
        );

        Ok(account.clone())
    }

    /// Resolve the shared handle for an account. The map read lock is dropped
    /// before the caller touches the per-account guard, so lookups on other
    /// accounts are never blocked by an in-flight mutation.
    fn resolve(&self, email: &str) -> DomainResult<Arc<Mutex<Account>>> {
        let accounts = self.accounts.read().unwrap();
        accounts.get(email).cloned().ok_or(DomainError::NotFound)
    }
}
