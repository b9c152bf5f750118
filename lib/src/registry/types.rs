use soroban_sdk::{contracttype, Address, BytesN, String};

use crate::errors::RegistryError;

// ---------------------------------------------------------------------------
// RecordState
// ---------------------------------------------------------------------------

/// Where a label sits in its lifecycle at a given ledger time.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordState {
    /// No record is stored under the label.
    Unregistered,
    /// `now < expiry`; only the owner may renew it.
    Active,
    /// `now >= expiry`; anyone may clear it or register over it.
    Expired,
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A leased key with its escrow.
///
/// Stored under `DataKey::Record(label)` in persistent storage.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Keccak-256 of the registered key.
    pub label: BytesN<32>,
    /// Payload: the key itself, or the address for address records.
    pub data: String,
    /// Receives the escrow when the record is cleared.
    pub owner: Address,
    /// Ledger time of registration or of the last renewal.
    pub timestamp: u64,
    /// Seconds the record stays active after `timestamp`.
    pub lifespan: u64,
    /// Escrowed amount, paid out exactly once.
    pub value: i128,
}

impl Record {
    /// End of a lease of `lifespan` seconds starting at `start`.
    pub fn lease_end(start: u64, lifespan: u64) -> Result<u64, RegistryError> {
        start
            .checked_add(lifespan)
            .ok_or(RegistryError::ArithmeticOverflow)
    }

    /// Stored records always pass [`Record::lease_end`], so this never saturates.
    pub fn expiry(&self) -> u64 {
        self.timestamp.saturating_add(self.lifespan)
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= self.expiry()
    }

    /// Renewal opens `threshold` seconds before expiry.
    pub fn renewable_from(&self, threshold: u64) -> u64 {
        self.expiry().saturating_sub(threshold)
    }

    pub fn state_at(&self, now: u64) -> RecordState {
        if self.is_expired_at(now) {
            RecordState::Expired
        } else {
            RecordState::Active
        }
    }
}
