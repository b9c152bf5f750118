#![no_std]
pub mod admin;
pub mod authorization;
pub mod errors;
pub mod fee;
pub mod registry;
pub mod storage_keys;
pub mod throttle;
pub mod validation;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use errors::RegistryError;
pub use fee::{FeeOracle, FeeOracleClient, FeeRate};
pub use registry::{Record, RecordState, RecordStore};
pub use storage_keys::*;

// Config
pub const ADMIN_KEY: &str = "admin";
pub const MAX_KEY_LENGTH: u32 = 256;
pub const ADDRESS_LENGTH: u32 = 40; // hex digits, no 0x prefix

// Defaults applied by `init` when the caller passes `None`
pub const DEFAULT_FEE_PER_BYTE: i128 = 2;
pub const DEFAULT_FEE_PER_SECOND: i128 = 5;
pub const DEFAULT_RENEW_THRESHOLD_SECONDS: u64 = 30;
pub const DEFAULT_SUGGESTED_GAS_PRICE: u64 = 100;

// Persistent entry TTLs, in ledgers (~5 s each)
pub const RECORD_TTL_THRESHOLD: u32 = 518_400; // ~30 days
pub const RECORD_TTL_EXTEND: u32 = 1_036_800; // ~60 days
