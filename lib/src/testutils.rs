#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::testutils::Ledger;
use soroban_sdk::{token, Address, Env};

/// A Stellar asset contract standing in for the escrow token.
pub struct PaymentToken<'a> {
    pub address: Address,
    pub client: token::Client<'a>,
    pub issuer: token::StellarAssetClient<'a>,
}

impl<'a> PaymentToken<'a> {
    pub fn create(env: &Env, admin: &Address) -> Self {
        let sac = env.register_stellar_asset_contract_v2(admin.clone());
        let address = sac.address();
        Self {
            client: token::Client::new(env, &address),
            issuer: token::StellarAssetClient::new(env, &address),
            address,
        }
    }

    pub fn fund(&self, to: &Address, amount: i128) {
        self.issuer.mint(to, &amount);
    }

    pub fn balance(&self, of: &Address) -> i128 {
        self.client.balance(of)
    }
}

/// Move the ledger clock forward by `seconds`.
pub fn advance_time(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}
