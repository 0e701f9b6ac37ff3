use tillbook_ledger::Ledger;

/// Application services shared by all request handlers.
pub struct AppServices {
    ledger: Ledger,
}

impl AppServices {
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

/// Build process-wide services.
///
/// The ledger is created once here and lives for the process lifetime. State
/// is volatile: a restart yields an empty ledger.
pub fn build_services() -> AppServices {
    AppServices {
        ledger: Ledger::new(),
    }
}
