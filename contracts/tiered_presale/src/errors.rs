// contracts/tiered_presale/src/errors.rs

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    /// "Currency and Token can not be the same"
    SameTokenAndCurrency = 4,
    /// "PoolInfo token cannot be address zero"
    ZeroTokenAddress = 5,
    /// "PoolInfo currency cannot be address zero"
    ZeroCurrencyAddress = 6,
    InvalidSchedule = 7,
    InvalidPrice = 8,
    InvalidAmount = 9,
    InvalidTierTable = 10,
    ProjectAlreadyRegistered = 11,
    PoolNotFound = 12,
    PresaleNotFound = 13,
    InvalidTier = 14,
    /// "Public sale is not yet activated"
    SaleNotStarted = 15,
    BetweenRounds = 16,
    SaleClosed = 17,
    /// "All tokens were purchased"
    SoldOut = 18,
    NotWhitelisted = 19,
    TierCapExceeded = 20,
    InsufficientSupply = 21,
    InsufficientAllowance = 22,
    InsufficientBalance = 23,
    /// "Please wait until release time for claiming tokens"
    ClaimNotOpen = 24,
    NothingToClaim = 25,
    /// "Already withdrawn"
    AlreadyClaimed = 26,
    ArithmeticOverflow = 27,
}

/// Coarse classification of [`Error`], for callers that only care about why
/// a call was rejected and not the exact condition.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Authorization,
    Configuration,
    Phase,
    SupplyExhausted,
    Eligibility,
    Funds,
    DoubleClaim,
    Lookup,
    Arithmetic,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotAuthorized => ErrorKind::Authorization,
            Error::AlreadyInitialized
            | Error::NotInitialized
            | Error::SameTokenAndCurrency
            | Error::ZeroTokenAddress
            | Error::ZeroCurrencyAddress
            | Error::InvalidSchedule
            | Error::InvalidPrice
            | Error::InvalidTierTable
            | Error::ProjectAlreadyRegistered => ErrorKind::Configuration,
            Error::SaleNotStarted
            | Error::BetweenRounds
            | Error::SaleClosed
            | Error::ClaimNotOpen => ErrorKind::Phase,
            Error::SoldOut | Error::InsufficientSupply => ErrorKind::SupplyExhausted,
            Error::NotWhitelisted | Error::TierCapExceeded => ErrorKind::Eligibility,
            Error::InsufficientAllowance | Error::InsufficientBalance => ErrorKind::Funds,
            Error::AlreadyClaimed => ErrorKind::DoubleClaim,
            Error::PoolNotFound
            | Error::PresaleNotFound
            | Error::InvalidTier
            | Error::NothingToClaim => ErrorKind::Lookup,
            Error::InvalidAmount | Error::ArithmeticOverflow => ErrorKind::Arithmetic,
        }
    }
}
