#![no_std]

#[cfg(test)]
mod test;

use registry_lib::{
    admin,
    validation::{record_label, validate_key},
    Record, RecordState, RecordStore, RegistryError, DEFAULT_RENEW_THRESHOLD_SECONDS,
};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

/// Leases human-readable names. The record payload is the name itself.
#[contract]
pub struct NameRegistry;

#[contractimpl]
impl NameRegistry {
    /// Initialize with an administrator, the fee oracle and the escrow token.
    pub fn init(
        env: Env,
        admin: Address,
        fee_oracle: Address,
        payment_token: Address,
        renew_threshold: Option<u64>,
    ) -> Result<(), RegistryError> {
        admin::init_admin(&env, &admin)?;
        RecordStore::new(env).configure(
            &fee_oracle,
            &payment_token,
            renew_threshold.unwrap_or(DEFAULT_RENEW_THRESHOLD_SECONDS),
        );
        Ok(())
    }

    /// Escrow required to hold `name` for `seconds`.
    pub fn estimate_registration_fee(
        env: Env,
        name: String,
        seconds: u64,
    ) -> Result<i128, RegistryError> {
        validate_key(&name)?;
        RecordStore::new(env).estimate(name.len(), seconds)
    }

    /// Lease `name` for as long as `payment` buys.
    pub fn register_name(
        env: Env,
        caller: Address,
        name: String,
        payment: i128,
    ) -> Result<Record, RegistryError> {
        let label = record_label(&env, &name)?;
        RecordStore::new(env).register(&caller, &label, &name, payment)
    }

    pub fn renew_name(env: Env, caller: Address, name: String) -> Result<Record, RegistryError> {
        let label = record_label(&env, &name)?;
        RecordStore::new(env).renew(&caller, &label)
    }

    pub fn transfer_name_ownership(
        env: Env,
        caller: Address,
        name: String,
        new_owner: Address,
    ) -> Result<(), RegistryError> {
        let label = record_label(&env, &name)?;
        RecordStore::new(env).transfer_ownership(&caller, &label, &new_owner)
    }

    /// Anyone may clear an expired name; the escrow goes to its owner.
    pub fn clear_expired_name(env: Env, name: String) -> Result<(), RegistryError> {
        let label = record_label(&env, &name)?;
        RecordStore::new(env).clear_expired(&label)?;
        Ok(())
    }

    pub fn is_name_expired(env: Env, name: String) -> Result<bool, RegistryError> {
        let label = record_label(&env, &name)?;
        RecordStore::new(env).is_expired(&label)
    }

    pub fn is_name_exists(env: Env, name: String) -> Result<bool, RegistryError> {
        let label = record_label(&env, &name)?;
        Ok(RecordStore::new(env).is_exists(&label))
    }

    pub fn get_record_label(env: Env, name: String) -> Result<BytesN<32>, RegistryError> {
        record_label(&env, &name)
    }

    pub fn get_record(env: Env, label: BytesN<32>) -> Option<Record> {
        RecordStore::new(env).get_record(&label)
    }

    /// `Unregistered`, `Active` or `Expired` at the current ledger time.
    pub fn record_state(env: Env, name: String) -> Result<RecordState, RegistryError> {
        let label = record_label(&env, &name)?;
        Ok(RecordStore::new(env).state(&label))
    }

    pub fn renew_threshold(env: Env) -> u64 {
        RecordStore::new(env).renew_threshold()
    }

    pub fn set_renew_threshold(env: Env, admin: Address, seconds: u64) -> Result<(), RegistryError> {
        admin::require_admin(&env, &admin)?;
        RecordStore::new(env).set_renew_threshold(seconds);
        Ok(())
    }

    pub fn admin(env: Env) -> Result<Address, RegistryError> {
        admin::get_admin(&env)
    }

    pub fn transfer_admin(
        env: Env,
        admin: Address,
        new_admin: Address,
    ) -> Result<(), RegistryError> {
        admin::transfer_admin(&env, &admin, &new_admin)
    }
}
