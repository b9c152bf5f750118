//! Fixed gas price gate in front of registration.
//!
//! Every throttled call must quote exactly the administrator's suggested
//! price, so a pending registration cannot be out-bid.

use soroban_sdk::{Env, Symbol};

use crate::{errors::RegistryError, storage_keys::DataKey, DEFAULT_SUGGESTED_GAS_PRICE};

pub struct GasPriceGuard {
    env: Env,
}

impl GasPriceGuard {
    pub fn new(env: Env) -> Self {
        Self { env }
    }

    pub fn suggested_gas_price(&self) -> u64 {
        self.env
            .storage()
            .instance()
            .get(&DataKey::SuggestedGasPrice)
            .unwrap_or(DEFAULT_SUGGESTED_GAS_PRICE)
    }

    /// Caller must already have passed the admin check.
    pub fn set_suggested_gas_price(&self, gas_price: u64) {
        self.env
            .storage()
            .instance()
            .set(&DataKey::SuggestedGasPrice, &gas_price);
        self.env
            .events()
            .publish((Symbol::new(&self.env, "gas_price_set"),), gas_price);
    }

    pub fn check(&self, gas_price: u64) -> Result<(), RegistryError> {
        if gas_price != self.suggested_gas_price() {
            return Err(RegistryError::GasPriceMismatch);
        }
        Ok(())
    }
}
