use soroban_sdk::{Address, BytesN, Env};

use super::types::Record;
use crate::{
    errors::RegistryError, storage_keys::DataKey, DEFAULT_RENEW_THRESHOLD_SECONDS,
    RECORD_TTL_EXTEND, RECORD_TTL_THRESHOLD,
};

/// All storage I/O of the record store.
///
/// `RecordStore` never touches `env.storage()` directly.
pub struct RecordRepository {
    env: Env,
}

impl RecordRepository {
    pub fn new(env: Env) -> Self {
        Self { env }
    }

    // ------------------------------------------------------------------
    // Records
    // ------------------------------------------------------------------

    pub fn save_record(&self, record: &Record) {
        let key = DataKey::Record(record.label.clone());
        let storage = self.env.storage().persistent();
        storage.set(&key, record);
        storage.extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
    }

    pub fn load_record(&self, label: &BytesN<32>) -> Option<Record> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Record(label.clone()))
    }

    pub fn record_exists(&self, label: &BytesN<32>) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&DataKey::Record(label.clone()))
    }

    pub fn remove_record(&self, label: &BytesN<32>) {
        self.env
            .storage()
            .persistent()
            .remove(&DataKey::Record(label.clone()));
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    pub fn save_config(&self, fee_oracle: &Address, payment_token: &Address, renew_threshold: u64) {
        let storage = self.env.storage().instance();
        storage.set(&DataKey::FeeOracle, fee_oracle);
        storage.set(&DataKey::PaymentToken, payment_token);
        storage.set(&DataKey::RenewThreshold, &renew_threshold);
    }

    pub fn fee_oracle(&self) -> Result<Address, RegistryError> {
        self.env
            .storage()
            .instance()
            .get(&DataKey::FeeOracle)
            .ok_or(RegistryError::NotInitialized)
    }

    pub fn payment_token(&self) -> Result<Address, RegistryError> {
        self.env
            .storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .ok_or(RegistryError::NotInitialized)
    }

    pub fn renew_threshold(&self) -> u64 {
        self.env
            .storage()
            .instance()
            .get(&DataKey::RenewThreshold)
            .unwrap_or(DEFAULT_RENEW_THRESHOLD_SECONDS)
    }

    pub fn set_renew_threshold(&self, seconds: u64) {
        self.env
            .storage()
            .instance()
            .set(&DataKey::RenewThreshold, &seconds);
    }
}
