use soroban_sdk::contracterror;

/// Error codes for the payment acceptor contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller does not hold the role required for this operation
    PermissionDenied = 3,
    /// Operation is not defined for the current lifecycle state
    InvalidState = 4,
    /// Cancellation attempted before the order lifetime elapsed
    TooEarly = 5,
    /// Payment amount does not match the order price
    InvalidAmount = 6,
    /// Empty merchant id, non-positive price, or zero lifetime
    InvalidArgument = 7,
    /// Refund withdrawal with no pending amount
    NothingToWithdraw = 8,
    /// Gateway settlement transfer did not complete
    SettlementFailed = 9,
}
