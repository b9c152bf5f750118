#![cfg(test)]

use super::*;
use registry_lib::testutils::{advance_time, PaymentToken};
use registry_lib::{FeeOracle, FeeRate, RecordState};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{contract, contractimpl};

const DUMMY_RATE: FeeRate = FeeRate {
    fee_per_byte: 2,
    fee_per_second: 5,
};

#[contract]
pub struct LifespanFeeDummy;

#[contractimpl]
impl FeeOracle for LifespanFeeDummy {
    fn estimate(_env: Env, byte_length: u32, seconds: u64) -> i128 {
        DUMMY_RATE.estimate(byte_length, seconds).unwrap()
    }

    fn lifespan(_env: Env, byte_length: u32, value: i128) -> u64 {
        DUMMY_RATE.lifespan(byte_length, value).unwrap()
    }
}

struct Setup<'a> {
    env: Env,
    registry: NameRegistryClient<'a>,
    registry_id: Address,
    token: PaymentToken<'a>,
    admin: Address,
    owner: Address,
    addr1: Address,
}

fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_700_000_000);

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let addr1 = Address::generate(&env);

    let token = PaymentToken::create(&env, &admin);
    token.fund(&owner, 1_000_000);
    token.fund(&addr1, 1_000_000);

    let fee_id = env.register(LifespanFeeDummy, ());
    let registry_id = env.register(NameRegistry, ());
    let registry = NameRegistryClient::new(&env, &registry_id);
    registry.init(&admin, &fee_id, &token.address, &None);

    Setup {
        env,
        registry,
        registry_id,
        token,
        admin,
        owner,
        addr1,
    }
}

#[test]
fn test_name_lifecycle() {
    let s = setup();
    let name = String::from_str(&s.env, "Satoshi Nakamoto");
    let seconds = 100u64;
    let value = s.registry.estimate_registration_fee(&name, &seconds);

    // register
    assert_eq!(s.registry.record_state(&name), RecordState::Unregistered);
    s.registry.register_name(&s.owner, &name, &value);
    assert!(s.registry.is_name_exists(&name));
    assert_eq!(s.registry.record_state(&name), RecordState::Active);

    // the same name cannot be taken while live
    assert_eq!(
        s.registry.try_register_name(&s.addr1, &name, &value),
        Err(Ok(RegistryError::RecordNotExpired))
    );

    // record fields
    let label = s.registry.get_record_label(&name);
    let record = s.registry.get_record(&label).unwrap();
    assert_eq!(record.data, name);
    assert_eq!(record.lifespan, seconds);
    assert_eq!(record.value, value);
    assert_eq!(record.owner, s.owner);

    // too early to renew
    assert_eq!(
        s.registry.try_renew_name(&s.owner, &name),
        Err(Ok(RegistryError::NotYetRenewable))
    );

    // move into the renewal window
    let renew_threshold = s.registry.renew_threshold();
    advance_time(&s.env, seconds - renew_threshold);

    assert_eq!(
        s.registry.try_renew_name(&s.addr1, &name),
        Err(Ok(RegistryError::NotOwner))
    );

    s.registry.transfer_name_ownership(&s.owner, &name, &s.addr1);
    assert_eq!(s.registry.get_record(&label).unwrap().owner, s.addr1);

    // renewed by the new owner
    let old_timestamp = s.registry.get_record(&label).unwrap().timestamp;
    advance_time(&s.env, 1);
    s.registry.renew_name(&s.addr1, &name);
    let new_timestamp = s.registry.get_record(&label).unwrap().timestamp;
    assert!(new_timestamp > old_timestamp);
    assert!(!s.registry.is_name_expired(&name));

    // past the full lifespan
    advance_time(&s.env, seconds + 1);
    assert!(s.registry.is_name_expired(&name));
    assert_eq!(s.registry.record_state(&name), RecordState::Expired);

    // clearing pays the escrow to the current owner
    let old_balance = s.token.balance(&s.addr1);
    s.registry.clear_expired_name(&name);
    let new_balance = s.token.balance(&s.addr1);

    assert_eq!(new_balance - old_balance, value);
    assert!(!s.registry.is_name_exists(&name));
    assert_eq!(s.registry.record_state(&name), RecordState::Unregistered);
    assert_eq!(s.token.balance(&s.registry_id), 0);
}

#[test]
fn test_default_renew_threshold() {
    let s = setup();
    assert_eq!(
        s.registry.renew_threshold(),
        registry_lib::DEFAULT_RENEW_THRESHOLD_SECONDS
    );
}

#[test]
fn test_set_renew_threshold_is_admin_only() {
    let s = setup();
    assert_eq!(
        s.registry.try_set_renew_threshold(&s.owner, &60),
        Err(Ok(RegistryError::Unauthorized))
    );

    s.registry.set_renew_threshold(&s.admin, &60);
    assert_eq!(s.registry.renew_threshold(), 60);
}

#[test]
fn test_wider_threshold_opens_renewal_earlier() {
    let s = setup();
    let name = String::from_str(&s.env, "Hal Finney");
    let value = s.registry.estimate_registration_fee(&name, &100);
    s.registry.register_name(&s.owner, &name, &value);

    advance_time(&s.env, 50);
    assert_eq!(
        s.registry.try_renew_name(&s.owner, &name),
        Err(Ok(RegistryError::NotYetRenewable))
    );

    s.registry.set_renew_threshold(&s.admin, &50);
    assert!(s.registry.try_renew_name(&s.owner, &name).is_ok());
}

#[test]
fn test_double_initialization() {
    let s = setup();
    assert_eq!(
        s.registry
            .try_init(&s.owner, &s.owner, &s.token.address, &None),
        Err(Ok(RegistryError::AlreadyInitialized))
    );
    assert_eq!(s.registry.admin(), s.admin);
}

#[test]
fn test_uninitialized_registry_rejects_registration() {
    let s = setup();
    let other_id = s.env.register(NameRegistry, ());
    let other = NameRegistryClient::new(&s.env, &other_id);
    let name = String::from_str(&s.env, "Satoshi Nakamoto");

    assert_eq!(
        other.try_register_name(&s.owner, &name, &532),
        Err(Ok(RegistryError::NotInitialized))
    );
    assert_eq!(
        other.try_estimate_registration_fee(&name, &100),
        Err(Ok(RegistryError::NotInitialized))
    );
}

#[test]
fn test_estimate_validation() {
    let s = setup();
    let empty = String::from_str(&s.env, "");
    let name = String::from_str(&s.env, "Satoshi Nakamoto");

    assert_eq!(
        s.registry.try_estimate_registration_fee(&empty, &100),
        Err(Ok(RegistryError::InvalidKey))
    );
    assert_eq!(
        s.registry.try_estimate_registration_fee(&name, &0),
        Err(Ok(RegistryError::InvalidLifespan))
    );
    assert!(
        s.registry.estimate_registration_fee(&name, &101)
            > s.registry.estimate_registration_fee(&name, &100)
    );
}

#[test]
fn test_clear_live_or_missing_name() {
    let s = setup();
    let name = String::from_str(&s.env, "Satoshi Nakamoto");
    assert_eq!(
        s.registry.try_clear_expired_name(&name),
        Err(Ok(RegistryError::NotFound))
    );

    let value = s.registry.estimate_registration_fee(&name, &100);
    s.registry.register_name(&s.owner, &name, &value);
    assert_eq!(
        s.registry.try_clear_expired_name(&name),
        Err(Ok(RegistryError::RecordNotExpired))
    );
}

#[test]
fn test_transfer_admin() {
    let s = setup();
    s.registry.transfer_admin(&s.admin, &s.owner);
    assert_eq!(s.registry.admin(), s.owner);
    assert_eq!(
        s.registry.try_set_renew_threshold(&s.admin, &10),
        Err(Ok(RegistryError::Unauthorized))
    );
}

#[test]
fn test_record_state_rejects_malformed_name() {
    let s = setup();
    assert_eq!(
        s.registry.try_record_state(&String::from_str(&s.env, "")),
        Err(Ok(RegistryError::InvalidKey))
    );
}
