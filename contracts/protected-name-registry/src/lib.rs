#![no_std]


use registry_lib::{
    admin,
    authorization::AuthorizationGuard,
    throttle::GasPriceGuard,
    validation::{record_label, validate_key},
    Record, RecordState, RecordStore, RegistryError, DEFAULT_RENEW_THRESHOLD_SECONDS,
};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

/// A name registry with two front-running guards in front of `register`.
///
/// * `authorized_register_name` reveals a name the administrator committed
///   earlier through `authorize(keccak256(name))`.
/// * `throttled_register_name` only accepts calls quoting the suggested gas
///   price.
///
/// The unguarded `register_name` stays available.
#[contract]
pub struct ProtectedNameRegistry;

#[contractimpl]
impl ProtectedNameRegistry {
    /// Initialize with an administrator, the fee oracle, the escrow token and
    /// optional renewal window and gas price.
    pub fn init(
        env: Env,
        admin: Address,
        fee_oracle: Address,
        payment_token: Address,
        renew_threshold: Option<u64>,
        suggested_gas_price: Option<u64>,
    ) -> Result<(), RegistryError> {
        admin::init_admin(&env, &admin)?;
        if let Some(gas_price) = suggested_gas_price {
            GasPriceGuard::new(env.clone()).set_suggested_gas_price(gas_price);
        }
        RecordStore::new(env).configure(
            &fee_oracle,
            &payment_token,
            renew_threshold.unwrap_or(DEFAULT_RENEW_THRESHOLD_SECONDS),
        );
        Ok(())
    }

    pub fn estimate_registration_fee(
        env: Env,
        name: String,
        seconds: u64,
    ) -> Result<i128, RegistryError> {
        validate_key(&name)?;
        RecordStore::new(env).estimate(name.len(), seconds)
    }

    // ------------------------------------------------------------------
    // Registration entry points
    // ------------------------------------------------------------------

    pub fn register_name(
        env: Env,
        caller: Address,
        name: String,
        payment: i128,
    ) -> Result<Record, RegistryError> {
        let label = record_label(&env, &name)?;
        RecordStore::new(env).register(&caller, &label, &name, payment)
    }

    /// Commit to a name without revealing it. `digest` is `keccak256(name)`.
    /// Admin only; the commit can be revealed only by `caller`.
    pub fn authorize(env: Env, caller: Address, digest: BytesN<32>) -> Result<(), RegistryError> {
        AuthorizationGuard::new(env).authorize(&caller, &digest)
    }

    pub fn is_authorized(env: Env, account: Address, digest: BytesN<32>) -> bool {
        AuthorizationGuard::new(env).is_authorized(&account, &digest)
    }

    /// Reveal and register a name committed by `caller`. Consumes the commit.
    pub fn authorized_register_name(
        env: Env,
        caller: Address,
        name: String,
        payment: i128,
    ) -> Result<Record, RegistryError> {
        let label = record_label(&env, &name)?;
        AuthorizationGuard::new(env.clone()).consume(&caller, &label)?;
        RecordStore::new(env).register(&caller, &label, &name, payment)
    }

    /// Register a name, provided the call quotes exactly the suggested gas price.
    pub fn throttled_register_name(
        env: Env,
        caller: Address,
        name: String,
        payment: i128,
        gas_price: u64,
    ) -> Result<Record, RegistryError> {
        GasPriceGuard::new(env.clone()).check(gas_price)?;
        let label = record_label(&env, &name)?;
        RecordStore::new(env).register(&caller, &label, &name, payment)
    }

    pub fn suggested_gas_price(env: Env) -> u64 {
        GasPriceGuard::new(env).suggested_gas_price()
    }

    pub fn set_suggested_gas_price(
        env: Env,
        admin: Address,
        gas_price: u64,
    ) -> Result<(), RegistryError> {
        admin::require_admin(&env, &admin)?;
        GasPriceGuard::new(env).set_suggested_gas_price(gas_price);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Record lifecycle
    // ------------------------------------------------------------------

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

    // ------------------------------------------------------------------
    // Administration
    // ------------------------------------------------------------------

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
