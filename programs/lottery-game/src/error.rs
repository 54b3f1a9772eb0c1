use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    // Authorization
    #[msg("Caller is not the owner")]
    NotAuthorized,

    // Settings validation
    #[msg("Tax percent cannot exceed 100%")]
    TaxPercentTooHigh,
    #[msg("Main reward percent cannot exceed 100%")]
    MainRewardPercentTooHigh,
    #[msg("Random Ten reward percent cannot exceed 100%")]
    RandomTenRewardPercentTooHigh,
    #[msg("Tax + Main + Random Ten cannot exceed 100%")]
    RewardDistributionTooHigh,
    #[msg("Mega Jackpot fee cannot exceed 100%")]
    MegaJackpotFeeTooHigh,
    #[msg("Team share percent cannot exceed 100%")]
    TeamSharePercentTooHigh,
    #[msg("Entry price must be greater than 0")]
    InvalidEntryPrice,
    #[msg("Min jackpot size must be greater than 0")]
    InvalidMinJackpotSize,
    #[msg("Max must be >= min")]
    InvalidMaxJackpotSize,
    #[msg("Max Mega Jackpot must be greater than 0")]
    InvalidMaxMegaJackpot,

    // Entry validation
    #[msg("Jackpot size out of range")]
    JackpotSizeOutOfRange,
    #[msg("Payment must equal the entry price")]
    IncorrectPayment,
    #[msg("Card type ids and counts must have the same length")]
    LengthMismatch,
    #[msg("Card wallet required to lock cards")]
    MissingCardWallet,
    #[msg("Card wallet does not belong to the player")]
    IncorrectCardWallet,
    #[msg("Card collection does not match the game")]
    IncorrectCardCollection,
    #[msg("Team wallet does not match the game")]
    IncorrectTeamWallet,
    #[msg("Math overflow")]
    MathOverflow,

    // Round state
    #[msg("Round id is not the next round")]
    InvalidRoundId,
    #[msg("Game is not active")]
    GameNotActive,
    #[msg("Invalid input or entry")]
    InvalidEntry,
    #[msg("Game not in Finished state")]
    GameNotFinished,
    #[msg("Game not in Rewarded state")]
    GameNotRewarded,

    // Capacity
    #[msg("Game is full")]
    GameFull,
    #[msg("Too many active games")]
    TooManyActiveGames,
    #[msg("Vault cannot cover the payout")]
    VaultShortfall,
    #[msg("No unencumbered funds to withdraw")]
    NothingToWithdraw,
    #[msg("Target jackpot needs more entrants than a round holds")]
    TargetExceedsCapacity,

    // Payout accounts
    #[msg("Payout accounts do not match the draw")]
    WinnerAccountMismatch,
    #[msg("Locked card accounts do not match the game")]
    LockedEntryMismatch,
    #[msg("No participants to draw from")]
    NoParticipants,
    #[msg("No investors to draw from")]
    NoInvestors,
    #[msg("Investor page does not match the registry")]
    InvestorPageMismatch,

    // Randomness
    #[msg("Incorrect randomness account")]
    IncorrectRandomnessAccount,
    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness not resolved")]
    RandomnessNotResolved,
    #[msg("Invalid randomness account data")]
    InvalidRandomnessData,
    #[msg("Randomness account is not owned by Switchboard")]
    RandomnessAccountNotOwned,
    #[msg("Randomness already committed")]
    RandomnessAlreadyCommitted,
}
