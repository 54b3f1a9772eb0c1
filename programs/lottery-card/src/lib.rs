use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use state::CardTier;

declare_id!("CardG4mKx2QbYVh7tLw8pN3sE5rJ6uD9aF1cZ4oM2kTq");

/// Multi-type card ledger. Cards held by a wallet boost that wallet's ticket
/// weight in a lottery round while they are locked by the game.
#[program]
pub mod lottery_card {
    use super::*;

    pub fn initialize_collection(ctx: Context<InitializeCollection>, base_uri: String) -> Result<()> {
        process_initialize_collection(ctx, base_uri)
    }

    pub fn set_lottery_game(ctx: Context<UpdateCollection>, lottery_game: Pubkey) -> Result<()> {
        process_set_lottery_game(ctx, lottery_game)
    }

    pub fn add_card_type(
        ctx: Context<UpdateCollection>,
        tier: CardTier,
        price: u64,
        supply_cap: u64,
    ) -> Result<()> {
        process_add_card_type(ctx, tier, price, supply_cap)
    }

    pub fn set_token_price(ctx: Context<UpdateCollection>, price: u64, card_type_id: u8) -> Result<()> {
        process_set_token_price(ctx, price, card_type_id)
    }

    pub fn set_base_uri(ctx: Context<UpdateCollection>, base_uri: String) -> Result<()> {
        process_set_base_uri(ctx, base_uri)
    }

    pub fn withdraw_proceeds(ctx: Context<WithdrawProceeds>) -> Result<()> {
        process_withdraw_proceeds(ctx)
    }

    pub fn open_wallet(ctx: Context<OpenWallet>, owner: Pubkey) -> Result<()> {
        process_open_wallet(ctx, owner)
    }

    pub fn mint(
        ctx: Context<MintCards>,
        to: Pubkey,
        card_type_id: u8,
        amount: u64,
        paid_amount: u64,
    ) -> Result<()> {
        process_mint(ctx, to, card_type_id, amount, paid_amount)
    }

    pub fn airdrop<'info>(
        ctx: Context<'_, '_, 'info, 'info, Airdrop<'info>>,
        recipients: Vec<Pubkey>,
        card_type_id: u8,
        amounts: Vec<u64>,
    ) -> Result<()> {
        process_airdrop(ctx, recipients, card_type_id, amounts)
    }

    pub fn transfer(ctx: Context<TransferCards>, to: Pubkey, card_type_id: u8, amount: u64) -> Result<()> {
        process_transfer(ctx, to, card_type_id, amount)
    }

    pub fn batch_transfer(
        ctx: Context<TransferCards>,
        to: Pubkey,
        card_type_ids: Vec<u8>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        process_batch_transfer(ctx, to, card_type_ids, amounts)
    }

    pub fn batch_lock_cards(
        ctx: Context<AdjustLocks>,
        owner: Pubkey,
        card_type_ids: Vec<u8>,
        counts: Vec<u64>,
    ) -> Result<()> {
        process_batch_lock_cards(ctx, owner, card_type_ids, counts)
    }

    pub fn batch_unlock_cards(
        ctx: Context<AdjustLocks>,
        owner: Pubkey,
        card_type_ids: Vec<u8>,
        counts: Vec<u64>,
    ) -> Result<()> {
        process_batch_unlock_cards(ctx, owner, card_type_ids, counts)
    }

    pub fn get_boost(
        ctx: Context<GetBoost>,
        owner: Pubkey,
        card_type_ids: Vec<u8>,
        counts: Vec<u64>,
    ) -> Result<u64> {
        process_get_boost(ctx, owner, card_type_ids, counts)
    }

    pub fn uri(ctx: Context<Uri>, card_type_id: u8) -> Result<String> {
        process_uri(ctx, card_type_id)
    }
}
