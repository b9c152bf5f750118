use soroban_sdk::{token, Address, BytesN, Env, String, Symbol};

use super::{
    repository::RecordRepository,
    types::{Record, RecordState},
};
use crate::{errors::RegistryError, fee::FeeOracleClient, validation::validate_lifespan};

/// The record lifecycle state machine.
///
/// Every specialization (and every guard) funnels into the single
/// [`RecordStore::register`] defined here. Storage I/O goes through
/// `RecordRepository`; pricing goes through whatever contract implements
/// `FeeOracle`.
pub struct RecordStore {
    repo: RecordRepository,
    env: Env,
}

impl RecordStore {
    pub fn new(env: Env) -> Self {
        Self {
            repo: RecordRepository::new(env.clone()),
            env,
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    pub fn configure(&self, fee_oracle: &Address, payment_token: &Address, renew_threshold: u64) {
        self.repo
            .save_config(fee_oracle, payment_token, renew_threshold);
    }

    pub fn renew_threshold(&self) -> u64 {
        self.repo.renew_threshold()
    }

    pub fn set_renew_threshold(&self, seconds: u64) {
        self.repo.set_renew_threshold(seconds);
        self.env
            .events()
            .publish((Symbol::new(&self.env, "threshold_set"),), seconds);
    }

    fn oracle(&self) -> Result<FeeOracleClient<'_>, RegistryError> {
        let address = self.repo.fee_oracle()?;
        Ok(FeeOracleClient::new(&self.env, &address))
    }

    fn token(&self) -> Result<token::Client<'_>, RegistryError> {
        let address = self.repo.payment_token()?;
        Ok(token::Client::new(&self.env, &address))
    }

    fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    // ------------------------------------------------------------------
    // Pricing
    // ------------------------------------------------------------------

    /// Escrow needed to hold a `byte_length` payload for `seconds`.
    pub fn estimate(&self, byte_length: u32, seconds: u64) -> Result<i128, RegistryError> {
        validate_lifespan(seconds)?;
        Ok(self.oracle()?.estimate(&byte_length, &seconds))
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Lease `label` to `caller` for as long as `payment` buys.
    ///
    /// The whole payment is escrowed. An expired record under the same
    /// label is refunded to its current owner before being overwritten.
    ///
    /// # Errors
    /// | Condition | Error |
    /// |---|---|
    /// | record under `label` still active | `RecordNotExpired` |
    /// | `payment` buys less than one second | `InsufficientPayment` |
    /// | `payment < estimate(data, lifespan)` | `InsufficientPayment` |
    /// | `now + lifespan` overflows | `ArithmeticOverflow` |
    pub fn register(
        &self,
        caller: &Address,
        label: &BytesN<32>,
        data: &String,
        payment: i128,
    ) -> Result<Record, RegistryError> {
        caller.require_auth();

        let now = self.now();
        let previous = self.repo.load_record(label);
        if let Some(existing) = &previous {
            if !existing.is_expired_at(now) {
                return Err(RegistryError::RecordNotExpired);
            }
        }

        if payment <= 0 {
            return Err(RegistryError::InsufficientPayment);
        }
        let byte_length = data.len();
        let oracle = self.oracle()?;
        let lifespan = oracle.lifespan(&byte_length, &payment);
        if lifespan == 0 || payment < oracle.estimate(&byte_length, &lifespan) {
            return Err(RegistryError::InsufficientPayment);
        }
        Record::lease_end(now, lifespan)?;

        let token = self.token()?;
        let contract = self.env.current_contract_address();
        token.transfer(caller, &contract, &payment);

        if let Some(expired) = previous {
            token.transfer(&contract, &expired.owner, &expired.value);
            self.env.events().publish(
                (Symbol::new(&self.env, "refunded"), expired.label.clone()),
                (expired.owner, expired.value),
            );
        }

        let record = Record {
            label: label.clone(),
            data: data.clone(),
            owner: caller.clone(),
            timestamp: now,
            lifespan,
            value: payment,
        };
        self.repo.save_record(&record);

        self.env.events().publish(
            (Symbol::new(&self.env, "registered"), label.clone()),
            (caller.clone(), lifespan, payment),
        );

        Ok(record)
    }

    /// Restart the lease clock of an active record from `now`.
    ///
    /// Allowed only inside `[expiry - renew_threshold, expiry)`.
    pub fn renew(&self, caller: &Address, label: &BytesN<32>) -> Result<Record, RegistryError> {
        caller.require_auth();

        let mut record = self
            .repo
            .load_record(label)
            .ok_or(RegistryError::NotFound)?;
        if &record.owner != caller {
            return Err(RegistryError::NotOwner);
        }

        let now = self.now();
        if record.is_expired_at(now) {
            return Err(RegistryError::RecordExpired);
        }
        if now < record.renewable_from(self.repo.renew_threshold()) {
            return Err(RegistryError::NotYetRenewable);
        }

        Record::lease_end(now, record.lifespan)?;
        record.timestamp = now;
        self.repo.save_record(&record);

        self.env.events().publish(
            (Symbol::new(&self.env, "renewed"), label.clone()),
            (caller.clone(), now),
        );

        Ok(record)
    }

    /// Hand the record, and with it the right to its escrow, to `new_owner`.
    ///
    /// Works on expired records too, until someone clears them.
    pub fn transfer_ownership(
        &self,
        caller: &Address,
        label: &BytesN<32>,
        new_owner: &Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();

        let mut record = self
            .repo
            .load_record(label)
            .ok_or(RegistryError::NotFound)?;
        if &record.owner != caller {
            return Err(RegistryError::NotOwner);
        }

        record.owner = new_owner.clone();
        self.repo.save_record(&record);

        self.env.events().publish(
            (Symbol::new(&self.env, "transferred"), label.clone()),
            (caller.clone(), new_owner.clone()),
        );

        Ok(())
    }

    /// Delete an expired record and pay its escrow to the current owner.
    ///
    /// Permissionless.
    pub fn clear_expired(&self, label: &BytesN<32>) -> Result<Record, RegistryError> {
        let record = self
            .repo
            .load_record(label)
            .ok_or(RegistryError::NotFound)?;
        if !record.is_expired_at(self.now()) {
            return Err(RegistryError::RecordNotExpired);
        }

        self.repo.remove_record(label);
        self.token()?.transfer(
            &self.env.current_contract_address(),
            &record.owner,
            &record.value,
        );

        self.env.events().publish(
            (Symbol::new(&self.env, "cleared"), label.clone()),
            (record.owner.clone(), record.value),
        );

        Ok(record)
    }

    // ------------------------------------------------------------------
    // Read-only queries
    // ------------------------------------------------------------------

    pub fn is_expired(&self, label: &BytesN<32>) -> Result<bool, RegistryError> {
        let record = self
            .repo
            .load_record(label)
            .ok_or(RegistryError::NotFound)?;
        Ok(record.is_expired_at(self.now()))
    }

    pub fn is_exists(&self, label: &BytesN<32>) -> bool {
        self.repo.record_exists(label)
    }

    pub fn state(&self, label: &BytesN<32>) -> RecordState {
        match self.repo.load_record(label) {
            Some(record) => record.state_at(self.now()),
            None => RecordState::Unregistered,
        }
    }

    pub fn get_record(&self, label: &BytesN<32>) -> Option<Record> {
        self.repo.load_record(label)
    }
}
