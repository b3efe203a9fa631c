use soroban_sdk::{contractevent, Address, String};

/// Event emitted when the acceptor is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub owner: Address,
    pub processor: Address,
}

/// Event emitted when the processor role is reassigned
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProcessorChangedEventData {
    #[topic]
    pub processor: Address,
}

/// Event emitted when the settlement gateway is swapped
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GatewayChangedEventData {
    #[topic]
    pub gateway: Address,
}

/// Event emitted when the cancellation window is changed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LifetimeChangedEventData {
    pub lifetime: u64,
}

/// Event emitted when a merchant is assigned
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MerchantAssignedEventData {
    pub merchant_id: String,
}

/// Event emitted when the merchant is unassigned
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MerchantUnassignedEventData {
    pub merchant_id: String,
}

/// Event emitted when an order is assigned
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderAssignedEventData {
    #[topic]
    pub order_id: u64,
    pub price: i128,
}

/// Event emitted when an unpaid order is cancelled after its lifetime
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderCancelledEventData {
    #[topic]
    pub order_id: u64,
}

/// Event emitted on a secure payment that binds the client
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentSecuredEventData {
    #[topic]
    pub client: Address,
    pub order_id: u64,
    pub amount: i128,
}

/// Event emitted on a direct payment with no client binding yet
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentReceivedEventData {
    #[topic]
    pub payer: Address,
    pub order_id: u64,
    pub amount: i128,
}

/// Event emitted when the processor binds or rebinds the client
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientBoundEventData {
    #[topic]
    pub client: Address,
    pub order_id: u64,
}

/// Event emitted when a refund is decided and earmarked
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentRefundedEventData {
    #[topic]
    pub client: Address,
    pub order_id: u64,
    pub amount: i128,
}

/// Event emitted when the earmarked refund is withdrawn
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundWithdrawnEventData {
    #[topic]
    pub client: Address,
    pub amount: i128,
}

/// Event emitted when escrow is settled through the gateway
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentProcessedEventData {
    #[topic]
    pub order_id: u64,
    pub amount: i128,
}
