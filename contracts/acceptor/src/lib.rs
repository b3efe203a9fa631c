#![no_std]

mod errors;
mod events;
mod gateway;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{
    contract, contractimpl, symbol_short, token, Address, BytesN, Env, String,
};

use crate::errors::Error;
use crate::events::*;
use crate::types::{AcceptorConfig, Order, RefundVault, State};

/// Payment acceptor contract.
///
/// Holds a client's payment in escrow for a single assigned order and
/// guarantees funds leave escrow through exactly one of three disjoint
/// terminal paths: gateway settlement, pull-based refund, or
/// timeout-gated cancellation of an unpaid order. The instance returns
/// to MerchantAssigned after every concluded order so it can be reused
/// for the merchant's next order.
#[contract]
pub struct PaymentAcceptor;

#[contractimpl]
impl PaymentAcceptor {
    // ========== INITIALIZATION ==========

    /// Initialize the acceptor.
    ///
    /// An empty `merchant_id` starts the instance in the Inactive state;
    /// a merchant must then be assigned before any order work can begin.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If already initialized
    /// * `Error::InvalidArgument` - If `lifetime` is zero
    pub fn initialize(
        e: Env,
        owner: Address,
        merchant_id: String,
        merchant_history: Option<Address>,
        gateway: Address,
        token: Address,
        lifetime: u64,
        processor: Address,
    ) -> Result<(), Error> {
        owner.require_auth();

        if storage::has_config(&e) {
            return Err(Error::AlreadyInitialized);
        }

        if lifetime == 0 {
            return Err(Error::InvalidArgument);
        }

        let config = AcceptorConfig {
            owner: owner.clone(),
            processor: processor.clone(),
            gateway,
            token,
            lifetime,
        };
        storage::set_config(&e, &config);

        let state = if merchant_id.is_empty() {
            State::Inactive
        } else {
            State::MerchantAssigned
        };
        let merchant_history = if merchant_id.is_empty() {
            None
        } else {
            merchant_history
        };

        let order = Order {
            merchant_id,
            merchant_history,
            order_id: 0,
            price: 0,
            client: None,
            escrow_balance: 0,
            state,
            assigned_at: 0,
            refund: RefundVault::Empty,
        };
        storage::set_order(&e, &order);
        storage::extend_instance_ttl(&e);

        InitializedEventData { owner, processor }.publish(&e);

        Ok(())
    }

    // ========== ROLE REGISTRY ==========

    /// Reassign the processor role (owner only, any state).
    pub fn set_processor(e: Env, owner: Address, new_processor: Address) -> Result<(), Error> {
        let mut config = Self::require_owner(&e, &owner)?;

        config.processor = new_processor.clone();
        storage::set_config(&e, &config);
        storage::extend_instance_ttl(&e);

        ProcessorChangedEventData {
            processor: new_processor,
        }
        .publish(&e);

        Ok(())
    }

    /// Bind or rebind the client identity (processor only).
    ///
    /// Allowed while an order is assigned or paid. Used for payments
    /// that arrived through a channel that could not carry the payer's
    /// identity: once the full price has been credited, binding the
    /// client advances the order to Paid.
    pub fn set_client(e: Env, processor: Address, client: Address) -> Result<(), Error> {
        Self::require_processor(&e, &processor)?;
        let mut order = storage::get_order(&e).ok_or(Error::NotInitialized)?;

        if order.state != State::OrderAssigned && order.state != State::Paid {
            return Err(Error::InvalidState);
        }

        order.client = Some(client.clone());
        if order.state == State::OrderAssigned && order.escrow_balance == order.price {
            order.state = State::Paid;
        }

        let order_id = order.order_id;
        storage::set_order(&e, &order);
        storage::extend_instance_ttl(&e);

        ClientBoundEventData { client, order_id }.publish(&e);

        Ok(())
    }

    // ========== MERCHANT & ORDER ASSIGNMENT ==========

    /// Assign a merchant (owner only, from Inactive).
    pub fn set_merchant(
        e: Env,
        owner: Address,
        merchant_id: String,
        history: Option<Address>,
    ) -> Result<(), Error> {
        Self::require_owner(&e, &owner)?;
        let mut order = storage::get_order(&e).ok_or(Error::NotInitialized)?;

        if order.state != State::Inactive {
            return Err(Error::InvalidState);
        }

        if merchant_id.is_empty() {
            return Err(Error::InvalidArgument);
        }

        order.merchant_id = merchant_id.clone();
        order.merchant_history = history;
        order.state = State::MerchantAssigned;

        storage::set_order(&e, &order);
        storage::extend_instance_ttl(&e);

        MerchantAssignedEventData { merchant_id }.publish(&e);

        Ok(())
    }

    /// Unassign the merchant (owner only, from MerchantAssigned).
    pub fn unassign_merchant(e: Env, owner: Address) -> Result<(), Error> {
        Self::require_owner(&e, &owner)?;
        let mut order = storage::get_order(&e).ok_or(Error::NotInitialized)?;

        if order.state != State::MerchantAssigned {
            return Err(Error::InvalidState);
        }

        let merchant_id = order.merchant_id.clone();
        order.merchant_id = String::from_str(&e, "");
        order.merchant_history = None;
        order.state = State::Inactive;

        storage::set_order(&e, &order);
        storage::extend_instance_ttl(&e);

        MerchantUnassignedEventData { merchant_id }.publish(&e);

        Ok(())
    }

    /// Assign an order (processor only, from MerchantAssigned).
    ///
    /// Records the order id and price and stamps the assignment time
    /// that gates cancellation.
    ///
    /// # Errors
    /// * `Error::InvalidArgument` - If `price` is not positive
    pub fn assign_order(
        e: Env,
        processor: Address,
        order_id: u64,
        price: i128,
    ) -> Result<(), Error> {
        Self::require_processor(&e, &processor)?;
        let mut order = storage::get_order(&e).ok_or(Error::NotInitialized)?;

        if order.state != State::MerchantAssigned {
            return Err(Error::InvalidState);
        }

        if price <= 0 {
            return Err(Error::InvalidArgument);
        }

        order.order_id = order_id;
        order.price = price;
        order.assigned_at = e.ledger().timestamp();
        order.state = State::OrderAssigned;

        storage::set_order(&e, &order);
        storage::extend_instance_ttl(&e);

        OrderAssignedEventData { order_id, price }.publish(&e);

        Ok(())
    }

    // ========== CANCELLATION ==========

    /// Cancel an unpaid order after its lifetime elapsed (processor only).
    ///
    /// Only reachable before any payment was credited, so there are no
    /// funds to move. The deal outcome is recorded on the merchant's
    /// reputation ledger best-effort.
    ///
    /// # Errors
    /// * `Error::TooEarly` - Before `assigned_at + lifetime`
    /// * `Error::InvalidState` - If funds were already credited
    pub fn cancel_order(
        e: Env,
        processor: Address,
        wallet: Address,
        fee: i128,
        discount: i128,
        deal_hash: BytesN<32>,
    ) -> Result<(), Error> {
        let config = Self::require_processor(&e, &processor)?;
        let mut order = storage::get_order(&e).ok_or(Error::NotInitialized)?;

        if order.state != State::OrderAssigned {
            return Err(Error::InvalidState);
        }

        // An anonymous payment may already be credited while the state
        // is still OrderAssigned; such an order can no longer be cancelled.
        if order.escrow_balance != 0 {
            return Err(Error::InvalidState);
        }

        let now = e.ledger().timestamp();
        if now < order.assigned_at + config.lifetime {
            return Err(Error::TooEarly);
        }

        gateway::record_deal(
            &e,
            &order.merchant_history,
            &order.merchant_id,
            &wallet,
            &deal_hash,
            symbol_short!("cancelled"),
            fee,
            discount,
        );

        let order_id = order.order_id;
        order.clear_order();
        storage::set_order(&e, &order);
        storage::extend_instance_ttl(&e);

        OrderCancelledEventData { order_id }.publish(&e);

        Ok(())
    }

    /// Change the cancellation window for future orders (owner only).
    pub fn set_lifetime(e: Env, owner: Address, seconds: u64) -> Result<(), Error> {
        let mut config = Self::require_owner(&e, &owner)?;

        if seconds == 0 {
            return Err(Error::InvalidArgument);
        }

        config.lifetime = seconds;
        storage::set_config(&e, &config);
        storage::extend_instance_ttl(&e);

        LifetimeChangedEventData { lifetime: seconds }.publish(&e);

        Ok(())
    }

    // ========== PAYMENT ACCEPTANCE ==========

    /// Accept payment from an identified client.
    ///
    /// The caller becomes the order's client and the order advances to
    /// Paid. The amount must equal the order price exactly; otherwise
    /// nothing is accepted.
    pub fn secure_pay(e: Env, client: Address, amount: i128) -> Result<(), Error> {
        client.require_auth();
        let config = storage::get_config(&e).ok_or(Error::NotInitialized)?;
        let mut order = storage::get_order(&e).ok_or(Error::NotInitialized)?;

        Self::check_payment(&order, amount)?;

        let token_client = token::TokenClient::new(&e, &config.token);
        token_client.transfer(&client, &e.current_contract_address(), &amount);

        order.client = Some(client.clone());
        order.escrow_balance = amount;
        order.state = State::Paid;

        let order_id = order.order_id;
        storage::set_order(&e, &order);
        storage::extend_instance_ttl(&e);

        PaymentSecuredEventData {
            client,
            order_id,
            amount,
        }
        .publish(&e);

        Ok(())
    }

    /// Accept a direct payment that carries no client identity.
    ///
    /// Credits escrow but leaves the order in OrderAssigned: the
    /// processor must bind a client out of band via `set_client` before
    /// the order counts as paid.
    pub fn pay(e: Env, payer: Address, amount: i128) -> Result<(), Error> {
        payer.require_auth();
        let config = storage::get_config(&e).ok_or(Error::NotInitialized)?;
        let mut order = storage::get_order(&e).ok_or(Error::NotInitialized)?;

        Self::check_payment(&order, amount)?;

        let token_client = token::TokenClient::new(&e, &config.token);
        token_client.transfer(&payer, &e.current_contract_address(), &amount);

        order.escrow_balance = amount;

        let order_id = order.order_id;
        storage::set_order(&e, &order);
        storage::extend_instance_ttl(&e);

        PaymentReceivedEventData {
            payer,
            order_id,
            amount,
        }
        .publish(&e);

        Ok(())
    }

    // ========== SETTLEMENT & REFUND ==========

    /// Refund the paid order (processor only).
    ///
    /// Moves the escrow balance into the refund vault for the bound
    /// client to pull. The actual transfer happens in `withdraw_refund`,
    /// so an unreachable client cannot block this decision.
    pub fn refund_payment(
        e: Env,
        processor: Address,
        wallet: Address,
        fee: i128,
        discount: i128,
        deal_hash: BytesN<32>,
    ) -> Result<(), Error> {
        Self::require_processor(&e, &processor)?;
        let mut order = storage::get_order(&e).ok_or(Error::NotInitialized)?;

        if order.state != State::Paid {
            return Err(Error::InvalidState);
        }

        let client = order.client.clone().ok_or(Error::InvalidState)?;
        let amount = order.escrow_balance;

        gateway::record_deal(
            &e,
            &order.merchant_history,
            &order.merchant_id,
            &wallet,
            &deal_hash,
            symbol_short!("refunded"),
            fee,
            discount,
        );

        order.refund = RefundVault::Pending(amount, client.clone());
        order.escrow_balance = 0;
        order.state = State::Refunding;

        let order_id = order.order_id;
        storage::set_order(&e, &order);
        storage::extend_instance_ttl(&e);

        PaymentRefundedEventData {
            client,
            order_id,
            amount,
        }
        .publish(&e);

        Ok(())
    }

    /// Withdraw the earmarked refund to the client. Permissionless: any
    /// caller may trigger it, funds always go to the recorded client.
    pub fn withdraw_refund(e: Env) -> Result<(), Error> {
        let config = storage::get_config(&e).ok_or(Error::NotInitialized)?;
        let mut order = storage::get_order(&e).ok_or(Error::NotInitialized)?;

        if order.state != State::Refunding {
            return Err(Error::InvalidState);
        }

        let (amount, client) = match &order.refund {
            RefundVault::Pending(amount, client) if *amount > 0 => (*amount, client.clone()),
            _ => return Err(Error::NothingToWithdraw),
        };

        let token_client = token::TokenClient::new(&e, &config.token);
        token_client.transfer(&e.current_contract_address(), &client, &amount);

        order.clear_order();
        storage::set_order(&e, &order);
        storage::extend_instance_ttl(&e);

        RefundWithdrawnEventData { client, amount }.publish(&e);

        Ok(())
    }

    /// Settle the paid order through the gateway (processor only).
    ///
    /// Transfers the full escrow balance to the gateway and invokes its
    /// fee-split settlement toward the merchant wallet. Any settlement
    /// failure aborts the call and rolls back the transfer.
    pub fn process_payment(
        e: Env,
        processor: Address,
        wallet: Address,
        fee: i128,
        discount: i128,
        deal_hash: BytesN<32>,
    ) -> Result<(), Error> {
        let config = Self::require_processor(&e, &processor)?;
        let mut order = storage::get_order(&e).ok_or(Error::NotInitialized)?;

        if order.state != State::Paid {
            return Err(Error::InvalidState);
        }

        let amount = order.escrow_balance;

        let token_client = token::TokenClient::new(&e, &config.token);
        token_client.transfer(&e.current_contract_address(), &config.gateway, &amount);

        gateway::settle(&e, &config.gateway, &wallet, amount, fee, discount, &deal_hash)?;

        gateway::record_deal(
            &e,
            &order.merchant_history,
            &order.merchant_id,
            &wallet,
            &deal_hash,
            symbol_short!("settled"),
            fee,
            discount,
        );

        let order_id = order.order_id;
        order.clear_order();
        storage::set_order(&e, &order);
        storage::extend_instance_ttl(&e);

        PaymentProcessedEventData { order_id, amount }.publish(&e);

        Ok(())
    }

    // ========== ADMINISTRATIVE ==========

    /// Swap the settlement gateway target (owner only, any state).
    pub fn set_gateway(e: Env, owner: Address, gateway: Address) -> Result<(), Error> {
        let mut config = Self::require_owner(&e, &owner)?;

        config.gateway = gateway.clone();
        storage::set_config(&e, &config);
        storage::extend_instance_ttl(&e);

        GatewayChangedEventData { gateway }.publish(&e);

        Ok(())
    }

    // ========== VIEWS ==========

    /// Get the full order aggregate
    pub fn get_order(e: Env) -> Result<Order, Error> {
        storage::get_order(&e).ok_or(Error::NotInitialized)
    }

    /// Get the current lifecycle state
    pub fn get_state(e: Env) -> Result<State, Error> {
        Ok(storage::get_order(&e).ok_or(Error::NotInitialized)?.state)
    }

    /// Get the acceptor configuration
    pub fn get_config(e: Env) -> Result<AcceptorConfig, Error> {
        storage::get_config(&e).ok_or(Error::NotInitialized)
    }

    /// Get the pending refund vault
    pub fn get_pending_refund(e: Env) -> Result<RefundVault, Error> {
        Ok(storage::get_order(&e).ok_or(Error::NotInitialized)?.refund)
    }

    // ========== INTERNAL HELPERS ==========

    fn require_owner(e: &Env, caller: &Address) -> Result<AcceptorConfig, Error> {
        caller.require_auth();
        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;
        if *caller != config.owner {
            return Err(Error::PermissionDenied);
        }
        Ok(config)
    }

    fn require_processor(e: &Env, caller: &Address) -> Result<AcceptorConfig, Error> {
        caller.require_auth();
        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;
        if *caller != config.processor {
            return Err(Error::PermissionDenied);
        }
        Ok(config)
    }

    /// Shared guards for both payment entry points: the order must be
    /// assigned and not yet funded, and the amount must match the price.
    fn check_payment(order: &Order, amount: i128) -> Result<(), Error> {
        if order.state != State::OrderAssigned {
            return Err(Error::InvalidState);
        }
        if order.escrow_balance != 0 {
            return Err(Error::InvalidState);
        }
        if amount != order.price {
            return Err(Error::InvalidAmount);
        }
        Ok(())
    }
}
