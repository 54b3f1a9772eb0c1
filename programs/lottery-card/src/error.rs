use anchor_lang::prelude::*;

#[error_code]
pub enum CardError {
    // Authorization
    #[msg("Caller is not the collection owner")]
    NotAuthorized,
    #[msg("Only LotteryGame can call this function")]
    NotLotteryGame,
    #[msg("Only the card owner can move these cards")]
    NotCardOwner,

    // Validation
    #[msg("Insufficient payment")]
    InsufficientPayment,
    #[msg("Exceeds total supply for this card type")]
    ExceedsSupply,
    #[msg("Card type does not exist")]
    InvalidCardType,
    #[msg("Card type ids and counts must have the same length")]
    LengthMismatch,
    #[msg("Recipients and amounts must have the same length")]
    RecipientsMismatch,
    #[msg("Recipient wallet does not match the recipient list")]
    RecipientWalletMismatch,
    #[msg("Base URI too long")]
    BaseUriTooLong,
    #[msg("Supply cap must be greater than 0")]
    InvalidSupplyCap,
    #[msg("Cannot transfer cards to the same wallet")]
    SelfTransfer,
    #[msg("Math overflow")]
    MathOverflow,

    // Capacity
    #[msg("Card type limit reached")]
    TooManyCardTypes,

    // Insufficient balance
    #[msg("Not enough unlocked cards")]
    NotEnoughUnlockedCards,
    #[msg("Not enough locked cards")]
    NotEnoughLockedCards,
    #[msg("Cannot transfer locked cards")]
    CannotTransferLocked,
    #[msg("No proceeds to withdraw")]
    NoProceeds,
}
