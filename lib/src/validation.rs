use soroban_sdk::{Bytes, BytesN, Env, String};

use crate::{errors::RegistryError, ADDRESS_LENGTH, MAX_KEY_LENGTH};

/// Keys are non-empty and at most `MAX_KEY_LENGTH` bytes.
pub fn validate_key(key: &String) -> Result<(), RegistryError> {
    if key.len() == 0 || key.len() > MAX_KEY_LENGTH {
        return Err(RegistryError::InvalidKey);
    }
    Ok(())
}

/// Copy a validated key out of the host into guest bytes.
pub fn key_bytes(env: &Env, key: &String) -> Result<Bytes, RegistryError> {
    validate_key(key)?;
    let len = key.len() as usize;
    let mut buf = [0u8; MAX_KEY_LENGTH as usize];
    key.copy_into_slice(&mut buf[..len]);
    Ok(Bytes::from_slice(env, &buf[..len]))
}

/// Keccak-256 of the key bytes; indexes the record and is the commit digest.
pub fn record_label(env: &Env, key: &String) -> Result<BytesN<32>, RegistryError> {
    let bytes = key_bytes(env, key)?;
    Ok(env.crypto().keccak256(&bytes).to_bytes())
}

/// Exactly `ADDRESS_LENGTH` hex digits, either case, no prefix.
pub fn is_hex_address(bytes: &[u8]) -> bool {
    bytes.len() == ADDRESS_LENGTH as usize && bytes.iter().all(u8::is_ascii_hexdigit)
}

pub fn is_valid_address(address: &String) -> bool {
    if address.len() != ADDRESS_LENGTH {
        return false;
    }
    let mut buf = [0u8; ADDRESS_LENGTH as usize];
    address.copy_into_slice(&mut buf);
    is_hex_address(&buf)
}

pub fn validate_address(address: &String) -> Result<(), RegistryError> {
    if !is_valid_address(address) {
        return Err(RegistryError::InvalidAddress);
    }
    Ok(())
}

pub fn validate_lifespan(seconds: u64) -> Result<(), RegistryError> {
    if seconds == 0 {
        return Err(RegistryError::InvalidLifespan);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_mixed_case_hex_address() {
        let env = Env::default();
        let ok = String::from_str(&env, "d9145CCE52D386f254917e481eB44e9943F39138");
        assert!(is_valid_address(&ok));
        assert!(validate_address(&ok).is_ok());
    }

    #[test]
    fn rejects_short_empty_and_symbolic_addresses() {
        let env = Env::default();
        for bad in [
            "d9145CCE52D386f254917e48",
            "",
            "!@#$%^&*)(_+!#^%&#&*!@&@&^$<>?>??><>?</>",
            "0xd9145CCE52D386f254917e481eB44e9943F391",
            "d9145CCE52D386f254917e481eB44e9943F391389",
            "g9145CCE52D386f254917e481eB44e9943F39138",
        ] {
            let address = String::from_str(&env, bad);
            assert!(!is_valid_address(&address), "accepted {bad}");
            assert_eq!(
                validate_address(&address),
                Err(RegistryError::InvalidAddress)
            );
        }
    }

    #[test]
    fn key_limits() {
        let env = Env::default();
        assert_eq!(
            key_bytes(&env, &String::from_str(&env, "")),
            Err(RegistryError::InvalidKey)
        );

        let longest = "a".repeat(MAX_KEY_LENGTH as usize);
        assert!(key_bytes(&env, &String::from_str(&env, &longest)).is_ok());

        let too_long = "a".repeat(MAX_KEY_LENGTH as usize + 1);
        assert_eq!(
            key_bytes(&env, &String::from_str(&env, &too_long)),
            Err(RegistryError::InvalidKey)
        );
    }

    #[test]
    fn label_is_keccak_of_key() {
        let env = Env::default();
        let name = "Satoshi Nakamoto";
        let expected = env
            .crypto()
            .keccak256(&Bytes::from_slice(&env, name.as_bytes()))
            .to_bytes();
        assert_eq!(
            record_label(&env, &String::from_str(&env, name)),
            Ok(expected)
        );
    }

    #[test]
    fn zero_lifespan_is_rejected() {
        assert_eq!(validate_lifespan(0), Err(RegistryError::InvalidLifespan));
        assert!(validate_lifespan(1).is_ok());
    }

    proptest! {
        #[test]
        fn prop_any_forty_hex_digits_are_valid(address in "[0-9a-fA-F]{40}") {
            prop_assert!(is_hex_address(address.as_bytes()));
        }

        #[test]
        fn prop_wrong_length_is_invalid(address in "[0-9a-fA-F]{0,80}") {
            prop_assume!(address.len() != 40);
            prop_assert!(!is_hex_address(address.as_bytes()));
        }

        #[test]
        fn prop_non_hex_character_is_invalid(
            prefix in "[0-9a-f]{20}",
            bad in "[g-zG-Z!@#$ _.-]",
            suffix in "[0-9a-f]{19}",
        ) {
            let address = std::format!("{prefix}{bad}{suffix}");
            prop_assert!(!is_hex_address(address.as_bytes()));
        }
    }
}
