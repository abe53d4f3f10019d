//! Crate-level test suites sharing scripted wallet and ledger mocks

pub mod test_helpers;
