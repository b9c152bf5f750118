#![no_std]


use registry_lib::{
    admin,
    validation::{is_valid_address, record_label, validate_address},
    Record, RecordState, RecordStore, RegistryError, ADDRESS_LENGTH,
    DEFAULT_RENEW_THRESHOLD_SECONDS,
};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

/// Leases names that resolve to a 40-hex-digit address.
///
/// Records are keyed by the name and carry the address as payload, so every
/// lease is priced on `ADDRESS_LENGTH` bytes.
#[contract]
pub struct AddressRegistry;

#[contractimpl]
impl AddressRegistry {
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

    pub fn is_address_valid(_env: Env, address: String) -> bool {
        is_valid_address(&address)
    }

    /// Escrow required to hold any address for `seconds`.
    pub fn estimate_registration_fee(env: Env, seconds: u64) -> Result<i128, RegistryError> {
        RecordStore::new(env).estimate(ADDRESS_LENGTH, seconds)
    }

    /// Lease `name` pointing at `address` for as long as `payment` buys.
    pub fn register_address(
        env: Env,
        caller: Address,
        name: String,
        address: String,
        payment: i128,
    ) -> Result<Record, RegistryError> {
        validate_address(&address)?;
        let label = record_label(&env, &name)?;
        RecordStore::new(env).register(&caller, &label, &address, payment)
    }

    pub fn renew_address(env: Env, caller: Address, name: String) -> Result<Record, RegistryError> {
        let label = record_label(&env, &name)?;
        RecordStore::new(env).renew(&caller, &label)
    }

    pub fn transfer_address_ownership(
        env: Env,
        caller: Address,
        name: String,
        new_owner: Address,
    ) -> Result<(), RegistryError> {
        let label = record_label(&env, &name)?;
        RecordStore::new(env).transfer_ownership(&caller, &label, &new_owner)
    }

    pub fn clear_expired_address(env: Env, name: String) -> Result<(), RegistryError> {
        let label = record_label(&env, &name)?;
        RecordStore::new(env).clear_expired(&label)?;
        Ok(())
    }

    pub fn is_address_expired(env: Env, name: String) -> Result<bool, RegistryError> {
        let label = record_label(&env, &name)?;
        RecordStore::new(env).is_expired(&label)
    }

    pub fn is_address_exists(env: Env, name: String) -> Result<bool, RegistryError> {
        let label = record_label(&env, &name)?;
        Ok(RecordStore::new(env).is_exists(&label))
    }

    /// The address `name` currently resolves to, expired or not.
    pub fn resolve(env: Env, name: String) -> Result<Option<String>, RegistryError> {
        let label = record_label(&env, &name)?;
        Ok(RecordStore::new(env).get_record(&label).map(|r| r.data))
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
