use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::CardError;
use crate::events::{CardsLocked, CardsUnlocked};
use crate::state::*;

/// Accounts required to lock or unlock cards of `owner`.
///
/// Only the signer recorded as `lottery_game` in the collection may use
/// these; in practice that is the game program's authority PDA signing
/// through CPI.
#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct AdjustLocks<'info> {
    #[account(
        seeds = [CARD_COLLECTION_SEED],
        bump = card_collection.bump,
        constraint = card_collection.lottery_game == game_authority.key() @ CardError::NotLotteryGame,
    )]
    pub card_collection: Account<'info, CardCollection>,

    pub game_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CARD_WALLET_SEED, owner.as_ref()],
        bump = card_wallet.bump,
    )]
    pub card_wallet: Account<'info, CardWallet>,
}

pub fn process_batch_lock_cards(
    ctx: Context<AdjustLocks>,
    owner: Pubkey,
    card_type_ids: Vec<u8>,
    counts: Vec<u64>,
) -> Result<()> {
    let cards = pair_entries(&card_type_ids, &counts)?;
    for entry in &cards {
        ctx.accounts.card_collection.card_type(entry.card_type_id)?;
    }

    ctx.accounts.card_wallet.lock(&cards)?;

    msg!("Locked {} card entries for {}", cards.len(), owner);
    emit!(CardsLocked { owner, cards });

    Ok(())
}

pub fn process_batch_unlock_cards(
    ctx: Context<AdjustLocks>,
    owner: Pubkey,
    card_type_ids: Vec<u8>,
    counts: Vec<u64>,
) -> Result<()> {
    let cards = pair_entries(&card_type_ids, &counts)?;

    ctx.accounts.card_wallet.unlock(&cards)?;

    msg!("Unlocked {} card entries for {}", cards.len(), owner);
    emit!(CardsUnlocked { owner, cards });

    Ok(())
}
