
use crate::{PaymentAcceptor, PaymentAcceptorClient};
use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error,
    testutils::{Address as _, Ledger},
    token, Address, BytesN, Env, String, Symbol,
};

pub const LIFETIME: u64 = 900;
pub const PRICE: i128 = 1000;
pub const ORDER_ID: u64 = 123;

// ========== Mock collaborators ==========

/// Gateway that accepts every settlement.
#[contract]
pub struct MockGateway;

#[contractimpl]
impl MockGateway {
    pub fn settle(
        _e: Env,
        _wallet: Address,
        _amount: i128,
        _fee: i128,
        _discount: i128,
        _deal_hash: BytesN<32>,
    ) {
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockError {
    Rejected = 1,
}

/// Gateway that rejects every settlement.
#[contract]
pub struct RejectingGateway;

#[contractimpl]
impl RejectingGateway {
    pub fn settle(
        e: Env,
        _wallet: Address,
        _amount: i128,
        _fee: i128,
        _discount: i128,
        _deal_hash: BytesN<32>,
    ) {
        panic_with_error!(&e, MockError::Rejected);
    }
}

/// Reputation ledger that counts recorded outcomes.
#[contract]
pub struct MockHistory;

#[contractimpl]
impl MockHistory {
    pub fn record(
        e: Env,
        _merchant_id: String,
        _wallet: Address,
        _deal_hash: BytesN<32>,
        outcome: Symbol,
        _fee: i128,
        _discount: i128,
    ) {
        let count: u32 = e.storage().instance().get(&outcome).unwrap_or(0);
        e.storage().instance().set(&outcome, &(count + 1));
    }

    pub fn outcome_count(e: Env, outcome: Symbol) -> u32 {
        e.storage().instance().get(&outcome).unwrap_or(0)
    }
}

/// Reputation ledger that rejects every record.
#[contract]
pub struct RejectingHistory;

#[contractimpl]
impl RejectingHistory {
    pub fn record(
        e: Env,
        _merchant_id: String,
        _wallet: Address,
        _deal_hash: BytesN<32>,
        _outcome: Symbol,
        _fee: i128,
        _discount: i128,
    ) {
        panic_with_error!(&e, MockError::Rejected);
    }
}

// ========== Setup helpers ==========

pub fn setup_test() -> (
    Env,
    PaymentAcceptorClient<'static>,
    Address,
    Address,
    Address,
    Address,
    Address,
    token::TokenClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = 1_700_000_000);

    let owner = Address::generate(&env);
    let processor = Address::generate(&env);
    let buyer = Address::generate(&env);

    let gateway = env.register(MockGateway, ());
    let history = env.register(MockHistory, ());

    let token_admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(token_admin);
    let token = token::TokenClient::new(&env, &sac.address());
    token::StellarAssetClient::new(&env, &sac.address()).mint(&buyer, &1_000_000);

    let contract_id = env.register(PaymentAcceptor, ());
    let client = PaymentAcceptorClient::new(&env, &contract_id);
    client.initialize(
        &owner,
        &String::from_str(&env, "merchant-1"),
        &Some(history.clone()),
        &gateway,
        &sac.address(),
        &LIFETIME,
        &processor,
    );

    (env, client, owner, processor, buyer, gateway, history, token)
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

pub fn deal_hash(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[7u8; 32])
}
