use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::*;

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct GetBoost<'info> {
    #[account(
        seeds = [CARD_COLLECTION_SEED],
        bump = card_collection.bump,
    )]
    pub card_collection: Account<'info, CardCollection>,

    #[account(
        seeds = [CARD_WALLET_SEED, owner.as_ref()],
        bump = card_wallet.bump,
    )]
    pub card_wallet: Account<'info, CardWallet>,
}

#[derive(Accounts)]
pub struct Uri<'info> {
    #[account(
        seeds = [CARD_COLLECTION_SEED],
        bump = card_collection.bump,
    )]
    pub card_collection: Account<'info, CardCollection>,
}

pub fn process_get_boost(
    ctx: Context<GetBoost>,
    _owner: Pubkey,
    card_type_ids: Vec<u8>,
    counts: Vec<u64>,
) -> Result<u64> {
    let cards = pair_entries(&card_type_ids, &counts)?;
    ctx.accounts
        .card_collection
        .boost(&ctx.accounts.card_wallet, &cards)
}

pub fn process_uri(ctx: Context<Uri>, card_type_id: u8) -> Result<String> {
    Ok(ctx.accounts.card_collection.uri(card_type_id))
}
