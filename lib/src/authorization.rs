//! Commit-reveal gate in front of registration.
//!
//! The administrator first publishes only `keccak256(key)` through
//! [`AuthorizationGuard::authorize`]. The key is revealed later, in the
//! registration call that consumes the digest. Observers of the first call
//! learn nothing they can front-run.

use soroban_sdk::{Address, BytesN, Env, Symbol};

use crate::{
    admin, errors::RegistryError, storage_keys::DataKey, RECORD_TTL_EXTEND, RECORD_TTL_THRESHOLD,
};

pub struct AuthorizationGuard {
    env: Env,
}

impl AuthorizationGuard {
    pub fn new(env: Env) -> Self {
        Self { env }
    }

    /// Mark `digest` as pending for `account`. Admin only.
    pub fn authorize(&self, account: &Address, digest: &BytesN<32>) -> Result<(), RegistryError> {
        admin::require_admin(&self.env, account)?;

        let key = DataKey::Authorization(account.clone(), digest.clone());
        let storage = self.env.storage().persistent();
        storage.set(&key, &true);
        storage.extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);

        self.env.events().publish(
            (Symbol::new(&self.env, "authorized"), account.clone()),
            digest.clone(),
        );
        Ok(())
    }

    pub fn is_authorized(&self, account: &Address, digest: &BytesN<32>) -> bool {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Authorization(account.clone(), digest.clone()))
            .unwrap_or(false)
    }

    /// Clear a pending digest. One-shot: a second call fails `Unauthorized`.
    pub fn consume(&self, account: &Address, digest: &BytesN<32>) -> Result<(), RegistryError> {
        if !self.is_authorized(account, digest) {
            return Err(RegistryError::Unauthorized);
        }
        self.env
            .storage()
            .persistent()
            .remove(&DataKey::Authorization(account.clone(), digest.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{contract, contractimpl, Bytes};

    #[contract]
    struct GuardHarness;

    #[contractimpl]
    impl GuardHarness {}

    fn digest_of(env: &Env, key: &[u8]) -> BytesN<32> {
        env.crypto()
            .keccak256(&Bytes::from_slice(env, key))
            .to_bytes()
    }

    #[test]
    fn digest_is_scoped_to_account_and_consumed_once() {
        let env = Env::default();
        env.mock_all_auths();

        let alice = Address::generate(&env);
        let mallory = Address::generate(&env);
        let digest = digest_of(&env, b"Gavin Wood");
        let contract_id = env.register(GuardHarness, ());

        env.as_contract(&contract_id, || {
            admin::init_admin(&env, &alice).unwrap();
        });

        env.as_contract(&contract_id, || {
            let guard = AuthorizationGuard::new(env.clone());
            assert_eq!(
                guard.consume(&alice, &digest),
                Err(RegistryError::Unauthorized)
            );

            assert_eq!(guard.authorize(&alice, &digest), Ok(()));
            assert!(guard.is_authorized(&alice, &digest));
            assert!(!guard.is_authorized(&mallory, &digest));
            assert_eq!(
                guard.consume(&mallory, &digest),
                Err(RegistryError::Unauthorized)
            );

            assert_eq!(guard.consume(&alice, &digest), Ok(()));
            assert!(!guard.is_authorized(&alice, &digest));
            assert_eq!(
                guard.consume(&alice, &digest),
                Err(RegistryError::Unauthorized)
            );
        });
    }

    #[test]
    fn non_admin_cannot_authorize() {
        let env = Env::default();
        env.mock_all_auths();

        let alice = Address::generate(&env);
        let mallory = Address::generate(&env);
        let digest = digest_of(&env, b"Gavin Wood");
        let contract_id = env.register(GuardHarness, ());

        env.as_contract(&contract_id, || {
            let guard = AuthorizationGuard::new(env.clone());
            assert_eq!(
                guard.authorize(&mallory, &digest),
                Err(RegistryError::NotInitialized)
            );
        });

        env.as_contract(&contract_id, || {
            admin::init_admin(&env, &alice).unwrap();
        });

        env.as_contract(&contract_id, || {
            let guard = AuthorizationGuard::new(env.clone());
            assert_eq!(
                guard.authorize(&mallory, &digest),
                Err(RegistryError::Unauthorized)
            );
            assert!(!guard.is_authorized(&mallory, &digest));
        });
    }
}
