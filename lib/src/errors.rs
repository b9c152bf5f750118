use soroban_sdk::contracterror;

/// Errors shared by the fee oracle and every registry contract.
///
/// Codes are stable: clients match on `Error(Contract, #n)`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    // Lifecycle of the contract itself
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // Authorization
    Unauthorized = 3,
    NotOwner = 4,

    // Validation
    InvalidKey = 5,
    InvalidAddress = 6,
    InvalidLifespan = 7,
    InvalidFeeRate = 8,

    // Record state
    RecordNotExpired = 9,
    RecordExpired = 10,
    NotYetRenewable = 11,
    NotFound = 12,

    // Payment
    InsufficientPayment = 13,

    // Throttle
    GasPriceMismatch = 14,

    ArithmeticOverflow = 15,
}
