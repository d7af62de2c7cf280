use soroban_sdk::contracterror;

/// Errors returned by wallet operations.
///
/// The discriminants are stable identifiers and surface to callers as
/// `Error(Contract, #n)`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    /// Caller is not the owner, the wallet is already initialized, or the
    /// guardian being added already exists
    Unauthorized = 1,
    /// Threshold is zero or exceeds the guardian count
    InvalidThreshold = 2,
    /// Guardian has already voted on this recovery
    AlreadyVoted = 3,
    /// Recovery does not exist or is no longer active
    RecoveryNotActive = 4,
    /// Caller or target is not a current guardian
    InvalidGuardian = 5,
    /// Reserved; no operation currently returns it
    RecoveryInProgress = 6,
    /// Recovery has already been executed
    RecoveryCompleted = 7,
    /// Recovery does not have enough votes to execute
    ThresholdNotMet = 8,
}
