use soroban_sdk::{vec, Address, BytesN, Env, IntoVal, String, Symbol, Val, Vec};

use crate::errors::Error;

/// Invoke `settle` on the settlement gateway. The gateway performs the
/// fee-split transfer to the merchant wallet from the funds it has
/// received; any failure is fatal to the settlement path and rolls back
/// the whole invocation frame.
pub fn settle(
    e: &Env,
    gateway: &Address,
    wallet: &Address,
    amount: i128,
    fee: i128,
    discount: i128,
    deal_hash: &BytesN<32>,
) -> Result<(), Error> {
    let settle_fn = Symbol::new(e, "settle");
    let args: Vec<Val> = vec![
        e,
        wallet.into_val(e),
        amount.into_val(e),
        fee.into_val(e),
        discount.into_val(e),
        deal_hash.into_val(e),
    ];

    e.try_invoke_contract::<Val, soroban_sdk::Error>(gateway, &settle_fn, args)
        .map(|_| ())
        .map_err(|_| Error::SettlementFailed)
}

/// Record a deal outcome on the merchant's reputation ledger, if one is
/// bound. Best-effort: a failing or absent ledger never blocks the state
/// transition that triggered the record.
pub fn record_deal(
    e: &Env,
    history: &Option<Address>,
    merchant_id: &String,
    wallet: &Address,
    deal_hash: &BytesN<32>,
    outcome: Symbol,
    fee: i128,
    discount: i128,
) {
    let Some(history) = history else {
        return;
    };

    let record_fn = Symbol::new(e, "record");
    let args: Vec<Val> = vec![
        e,
        merchant_id.into_val(e),
        wallet.into_val(e),
        deal_hash.into_val(e),
        outcome.into_val(e),
        fee.into_val(e),
        discount.into_val(e),
    ];

    let _ = e.try_invoke_contract::<Val, soroban_sdk::Error>(history, &record_fn, args);
}
