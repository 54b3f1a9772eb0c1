use anchor_lang::prelude::*;

#[constant]
pub const NAME: &str = "LotteryGameCard";

#[constant]
pub const SYMBOL: &str = "LGCard";

pub const CARD_COLLECTION_SEED: &[u8] = b"card_collection";
pub const CARD_WALLET_SEED: &[u8] = b"card_wallet";

/// Upper bound on distinct card types; also the width of every wallet.
pub const MAX_CARD_TYPES: usize = 16;

pub const MAX_BASE_URI_LEN: usize = 128;
