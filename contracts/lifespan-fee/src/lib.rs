#![no_std]


use registry_lib::{
    admin, DataKey, FeeOracle, FeeRate, RegistryError, DEFAULT_FEE_PER_BYTE,
    DEFAULT_FEE_PER_SECOND,
};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Symbol};

fn load_rate(env: &Env) -> Result<FeeRate, RegistryError> {
    env.storage()
        .instance()
        .get(&DataKey::FeeRate)
        .ok_or(RegistryError::NotInitialized)
}

fn save_rate(env: &Env, rate: &FeeRate) {
    env.storage().instance().set(&DataKey::FeeRate, rate);
    env.events().publish(
        (Symbol::new(env, "fee_rate_set"),),
        (rate.fee_per_byte, rate.fee_per_second),
    );
}

/// Prices a lease as `fee_per_byte * bytes + fee_per_second * seconds`.
#[contract]
pub struct LifespanFee;

#[contractimpl]
impl LifespanFee {
    /// Initialize with an administrator and optional starting rates.
    pub fn init(
        env: Env,
        admin: Address,
        fee_per_byte: Option<i128>,
        fee_per_second: Option<i128>,
    ) -> Result<(), RegistryError> {
        let rate = FeeRate::new(
            fee_per_byte.unwrap_or(DEFAULT_FEE_PER_BYTE),
            fee_per_second.unwrap_or(DEFAULT_FEE_PER_SECOND),
        )?;
        admin::init_admin(&env, &admin)?;
        save_rate(&env, &rate);
        Ok(())
    }

    pub fn fee_rate(env: Env) -> Result<FeeRate, RegistryError> {
        load_rate(&env)
    }

    pub fn fee_per_byte(env: Env) -> Result<i128, RegistryError> {
        Ok(load_rate(&env)?.fee_per_byte)
    }

    pub fn fee_per_second(env: Env) -> Result<i128, RegistryError> {
        Ok(load_rate(&env)?.fee_per_second)
    }

    /// Admin only. Must not be negative.
    pub fn set_fee_per_byte(
        env: Env,
        admin: Address,
        fee_per_byte: i128,
    ) -> Result<(), RegistryError> {
        admin::require_admin(&env, &admin)?;
        let rate = FeeRate::new(fee_per_byte, load_rate(&env)?.fee_per_second)?;
        save_rate(&env, &rate);
        Ok(())
    }

    /// Admin only. Must stay positive: it divides every lifespan computation.
    pub fn set_fee_per_second(
        env: Env,
        admin: Address,
        fee_per_second: i128,
    ) -> Result<(), RegistryError> {
        admin::require_admin(&env, &admin)?;
        let rate = FeeRate::new(load_rate(&env)?.fee_per_byte, fee_per_second)?;
        save_rate(&env, &rate);
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

#[contractimpl]
impl FeeOracle for LifespanFee {
    fn estimate(env: Env, byte_length: u32, seconds: u64) -> i128 {
        load_rate(&env)
            .and_then(|rate| rate.estimate(byte_length, seconds))
            .unwrap_or_else(|e| panic_with_error!(&env, e))
    }

    fn lifespan(env: Env, byte_length: u32, value: i128) -> u64 {
        load_rate(&env)
            .and_then(|rate| rate.lifespan(byte_length, value))
            .unwrap_or_else(|e| panic_with_error!(&env, e))
    }
}
