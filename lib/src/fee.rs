use soroban_sdk::{contractclient, contracttype, Env};

use crate::errors::RegistryError;

/// Capability interface every fee oracle contract exposes.
///
/// Registries only ever hold the oracle's address and call it through the
/// generated `FeeOracleClient`; the pricing model behind it is opaque.
#[contractclient(name = "FeeOracleClient")]
pub trait FeeOracle {
    /// Escrow required to hold `byte_length` bytes for `seconds`.
    fn estimate(env: Env, byte_length: u32, seconds: u64) -> i128;

    /// Seconds a payment of `value` buys for `byte_length` bytes.
    fn lifespan(env: Env, byte_length: u32, value: i128) -> u64;
}

/// Linear pricing: a flat charge per stored byte plus a charge per second.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeeRate {
    pub fee_per_byte: i128,
    pub fee_per_second: i128,
}

impl FeeRate {
    pub fn new(fee_per_byte: i128, fee_per_second: i128) -> Result<Self, RegistryError> {
        let rate = Self {
            fee_per_byte,
            fee_per_second,
        };
        rate.validate()?;
        Ok(rate)
    }

    /// `fee_per_second` is the divisor of [`FeeRate::lifespan`] and must stay positive.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.fee_per_byte < 0 || self.fee_per_second <= 0 {
            return Err(RegistryError::InvalidFeeRate);
        }
        Ok(())
    }

    fn byte_fee(&self, byte_length: u32) -> Result<i128, RegistryError> {
        self.fee_per_byte
            .checked_mul(byte_length as i128)
            .ok_or(RegistryError::ArithmeticOverflow)
    }

    /// `fee_per_byte * byte_length + fee_per_second * seconds`
    pub fn estimate(&self, byte_length: u32, seconds: u64) -> Result<i128, RegistryError> {
        let time_fee = self
            .fee_per_second
            .checked_mul(seconds as i128)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        self.byte_fee(byte_length)?
            .checked_add(time_fee)
            .ok_or(RegistryError::ArithmeticOverflow)
    }

    /// `(value - fee_per_byte * byte_length) / fee_per_second`, truncating.
    ///
    /// A value that does not cover the byte fee buys nothing.
    pub fn lifespan(&self, byte_length: u32, value: i128) -> Result<u64, RegistryError> {
        let byte_fee = self.byte_fee(byte_length)?;
        if value <= byte_fee {
            return Ok(0);
        }
        let seconds = (value - byte_fee) / self.fee_per_second;
        u64::try_from(seconds).map_err(|_| RegistryError::ArithmeticOverflow)
    }
}
