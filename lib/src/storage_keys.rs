use soroban_sdk::{contracttype, Address, BytesN};

/// Storage layout shared by the registry contracts.
///
/// Instance storage holds configuration; persistent storage holds records
/// and pending authorizations.
#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Fee oracle contract consulted for estimates and lifespans.
    FeeOracle,
    /// Token in which escrow is paid and refunded.
    PaymentToken,
    /// Seconds before expiry during which an owner may renew.
    RenewThreshold,
    /// Linear fee rates (fee oracle contract only).
    FeeRate,
    /// Gas price every throttled registration must quote.
    SuggestedGasPrice,
    /// Record indexed by its label.
    Record(BytesN<32>),
    /// Pending commit-reveal digest for an account.
    Authorization(Address, BytesN<32>),
}
