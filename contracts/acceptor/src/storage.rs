use soroban_sdk::Env;

use crate::types::{AcceptorConfig, Order, StorageKey};

/// Number of ledgers in a day (assuming ~5 second block time)
const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Config ==========

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&StorageKey::Config)
}

pub fn get_config(e: &Env) -> Option<AcceptorConfig> {
    e.storage()
        .instance()
        .get::<_, AcceptorConfig>(&StorageKey::Config)
}

pub fn set_config(e: &Env, config: &AcceptorConfig) {
    e.storage().instance().set(&StorageKey::Config, config);
}

// ========== Order aggregate ==========

pub fn get_order(e: &Env) -> Option<Order> {
    e.storage().instance().get::<_, Order>(&StorageKey::Order)
}

pub fn set_order(e: &Env, order: &Order) {
    e.storage().instance().set(&StorageKey::Order, order);
}

// ========== TTL ==========

/// Extend the TTL of instance storage.
/// Called during state-changing operations.
pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}
