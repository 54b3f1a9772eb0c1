use anchor_lang::prelude::*;

use crate::state::{CardAmount, CardTier};

#[event]
pub struct CollectionInitialized {
    pub authority: Pubkey,
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
}

#[event]
pub struct LotteryGameSet {
    pub lottery_game: Pubkey,
}

#[event]
pub struct CardTypeAdded {
    pub card_type_id: u8,
    pub tier: CardTier,
    pub price: u64,
    pub supply_cap: u64,
}

#[event]
pub struct TokenPriceSet {
    pub card_type_id: u8,
    pub price: u64,
}

#[event]
pub struct BaseUriSet {
    pub base_uri: String,
}

#[event]
pub struct CardsMinted {
    pub to: Pubkey,
    pub card_type_id: u8,
    pub amount: u64,
    pub paid: u64,
    pub minted: u64,
}

#[event]
pub struct CardsAirdropped {
    pub card_type_id: u8,
    pub recipients: u32,
    pub total: u64,
}

#[event]
pub struct CardsTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub cards: Vec<CardAmount>,
}

#[event]
pub struct CardsLocked {
    pub owner: Pubkey,
    pub cards: Vec<CardAmount>,
}

#[event]
pub struct CardsUnlocked {
    pub owner: Pubkey,
    pub cards: Vec<CardAmount>,
}

#[event]
pub struct ProceedsWithdrawn {
    pub authority: Pubkey,
    pub amount: u64,
}
