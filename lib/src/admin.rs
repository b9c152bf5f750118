use soroban_sdk::{Address, Env, Symbol};

use crate::{errors::RegistryError, ADMIN_KEY};

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&Symbol::new(env, ADMIN_KEY))
}

/// Store the first administrator. Fails if one is already set.
pub fn init_admin(env: &Env, admin: &Address) -> Result<(), RegistryError> {
    if has_admin(env) {
        return Err(RegistryError::AlreadyInitialized);
    }
    admin.require_auth();
    env.storage()
        .instance()
        .set(&Symbol::new(env, ADMIN_KEY), admin);
    Ok(())
}

pub fn get_admin(env: &Env) -> Result<Address, RegistryError> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, ADMIN_KEY))
        .ok_or(RegistryError::NotInitialized)
}

pub fn verify_admin(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    let admin = get_admin(env)?;
    if &admin != caller {
        return Err(RegistryError::Unauthorized);
    }
    Ok(())
}

/// `require_auth` plus the role check, for admin-only entry points.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    caller.require_auth();
    verify_admin(env, caller)
}

pub fn transfer_admin(
    env: &Env,
    current_admin: &Address,
    new_admin: &Address,
) -> Result<(), RegistryError> {
    require_admin(env, current_admin)?;
    env.storage()
        .instance()
        .set(&Symbol::new(env, ADMIN_KEY), new_admin);

    env.events().publish(
        (Symbol::new(env, "admin_transferred"),),
        (current_admin.clone(), new_admin.clone()),
    );
    Ok(())
}
