use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::CardError;
use crate::events::CardsTransferred;
use crate::state::*;

/// Accounts required to move cards between two wallets.
#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct TransferCards<'info> {
    /// Holder of the cards; also pays for the recipient wallet if needed.
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [CARD_COLLECTION_SEED],
        bump = card_collection.bump,
    )]
    pub card_collection: Account<'info, CardCollection>,

    #[account(
        mut,
        seeds = [CARD_WALLET_SEED, owner.key().as_ref()],
        bump = from_wallet.bump,
        constraint = from_wallet.owner == owner.key() @ CardError::NotCardOwner,
    )]
    pub from_wallet: Account<'info, CardWallet>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + CardWallet::INIT_SPACE,
        seeds = [CARD_WALLET_SEED, to.as_ref()],
        bump
    )]
    pub to_wallet: Account<'info, CardWallet>,

    pub system_program: Program<'info, System>,
}

pub fn process_transfer(
    ctx: Context<TransferCards>,
    to: Pubkey,
    card_type_id: u8,
    amount: u64,
) -> Result<()> {
    move_cards(
        ctx,
        to,
        vec![CardAmount {
            card_type_id,
            count: amount,
        }],
    )
}

pub fn process_batch_transfer(
    ctx: Context<TransferCards>,
    to: Pubkey,
    card_type_ids: Vec<u8>,
    amounts: Vec<u64>,
) -> Result<()> {
    let cards = pair_entries(&card_type_ids, &amounts)?;
    move_cards(ctx, to, cards)
}

/// Shared by single and batch transfers so the locked-card check has one path.
fn move_cards(ctx: Context<TransferCards>, to: Pubkey, cards: Vec<CardAmount>) -> Result<()> {
    let from = ctx.accounts.owner.key();
    require_keys_neq!(from, to, CardError::SelfTransfer);
    for entry in &cards {
        ctx.accounts.card_collection.card_type(entry.card_type_id)?;
    }

    ctx.accounts.from_wallet.debit(&cards)?;

    let to_wallet = &mut ctx.accounts.to_wallet;
    if to_wallet.owner == Pubkey::default() {
        to_wallet.owner = to;
        to_wallet.bump = ctx.bumps.to_wallet;
    }
    to_wallet.credit(&cards)?;

    msg!("Transferred cards from {} to {}", from, to);
    emit!(CardsTransferred { from, to, cards });

    Ok(())
}
