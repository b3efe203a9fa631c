use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the payment acceptor contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Acceptor configuration (roles, gateway, token, lifetime)
    Config,
    /// The single order aggregate
    Order,
}

/// Order lifecycle state
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum State {
    /// No merchant assigned; order work is suspended
    Inactive = 0,
    /// Merchant assigned, waiting for an order
    MerchantAssigned = 1,
    /// Order assigned, waiting for payment or cancellation
    OrderAssigned = 2,
    /// Payment credited and client bound; awaiting settlement or refund
    Paid = 3,
    /// Refund decided; funds earmarked for the client to pull
    Refunding = 4,
}

impl State {
    pub fn as_u32(&self) -> u32 {
        match self {
            State::Inactive => 0,
            State::MerchantAssigned => 1,
            State::OrderAssigned => 2,
            State::Paid => 3,
            State::Refunding => 4,
        }
    }

    pub fn from_u32(value: u32) -> Option<State> {
        match value {
            0 => Some(State::Inactive),
            1 => Some(State::MerchantAssigned),
            2 => Some(State::OrderAssigned),
            3 => Some(State::Paid),
            4 => Some(State::Refunding),
            _ => None,
        }
    }
}

/// Earmarked refund awaiting withdrawal by the client.
/// Non-empty only while the order is in the Refunding state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RefundVault {
    /// No refund pending
    Empty,
    /// Amount owed and the address entitled to pull it
    Pending(i128, Address),
}

/// The single order aggregate. One per contract instance, cleared and
/// reused for the merchant's next order after every conclusion.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Order {
    /// Merchant identifier; non-empty once assigned
    pub merchant_id: String,
    /// Reputation ledger contract for this merchant, if any
    pub merchant_history: Option<Address>,
    /// Current order identifier
    pub order_id: u64,
    /// Order price in token units
    pub price: i128,
    /// Paying party, once known
    pub client: Option<Address>,
    /// Funds currently held for this order
    pub escrow_balance: i128,
    /// Lifecycle state
    pub state: State,
    /// Ledger timestamp of order assignment
    pub assigned_at: u64,
    /// Pending refund vault
    pub refund: RefundVault,
}

impl Order {
    /// Clear all order-scoped fields and return to MerchantAssigned,
    /// keeping the merchant binding for reuse.
    pub fn clear_order(&mut self) {
        self.order_id = 0;
        self.price = 0;
        self.client = None;
        self.escrow_balance = 0;
        self.assigned_at = 0;
        self.refund = RefundVault::Empty;
        self.state = State::MerchantAssigned;
    }
}

/// Acceptor configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AcceptorConfig {
    /// Owner address with administrative privileges
    pub owner: Address,
    /// Processor address driving order assignment and settlement
    pub processor: Address,
    /// Settlement gateway contract
    pub gateway: Address,
    /// Token custodied in escrow
    pub token: Address,
    /// Cancellation window in seconds
    pub lifetime: u64,
}
