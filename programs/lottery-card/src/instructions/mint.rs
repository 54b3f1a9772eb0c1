use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::*;
use crate::error::CardError;
use crate::events::*;
use crate::state::*;

/// Accounts required to create a card wallet for `owner`.
#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct OpenWallet<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + CardWallet::INIT_SPACE,
        seeds = [CARD_WALLET_SEED, owner.as_ref()],
        bump
    )]
    pub card_wallet: Account<'info, CardWallet>,

    pub system_program: Program<'info, System>,
}

/// Accounts required to buy cards.
#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct MintCards<'info> {
    /// Pays the card price and any wallet rent.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Holds the collection config and receives the payment.
    #[account(
        mut,
        seeds = [CARD_COLLECTION_SEED],
        bump = card_collection.bump,
    )]
    pub card_collection: Account<'info, CardCollection>,

    /// Wallet of the recipient, created on first mint.
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + CardWallet::INIT_SPACE,
        seeds = [CARD_WALLET_SEED, to.as_ref()],
        bump
    )]
    pub card_wallet: Account<'info, CardWallet>,

    pub system_program: Program<'info, System>,
}

/// Accounts required to airdrop cards.
///
/// remaining_accounts: one existing, writable card wallet per recipient, in
/// the same order as the `recipients` argument.
#[derive(Accounts)]
pub struct Airdrop<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CARD_COLLECTION_SEED],
        bump = card_collection.bump,
        constraint = card_collection.authority == authority.key() @ CardError::NotAuthorized,
    )]
    pub card_collection: Account<'info, CardCollection>,
}

pub fn process_open_wallet(ctx: Context<OpenWallet>, owner: Pubkey) -> Result<()> {
    let card_wallet = &mut ctx.accounts.card_wallet;
    card_wallet.owner = owner;
    card_wallet.bump = ctx.bumps.card_wallet;
    Ok(())
}

/// Mints `amount` cards of one type to `to`.
///
/// Steps:
/// 1. Check the payment covers `price * amount`.
/// 2. Check the supply cap.
/// 3. Move `paid_amount` lamports into the collection account.
/// 4. Credit the recipient's wallet.
pub fn process_mint(
    ctx: Context<MintCards>,
    to: Pubkey,
    card_type_id: u8,
    amount: u64,
    paid_amount: u64,
) -> Result<()> {
    let cost = ctx
        .accounts
        .card_collection
        .mint_cost(card_type_id, amount)?;
    require!(paid_amount >= cost, CardError::InsufficientPayment);

    ctx.accounts
        .card_collection
        .record_mint(card_type_id, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.card_collection.to_account_info(),
            },
        ),
        paid_amount,
    )?;

    let card_wallet = &mut ctx.accounts.card_wallet;
    if card_wallet.owner == Pubkey::default() {
        card_wallet.owner = to;
        card_wallet.bump = ctx.bumps.card_wallet;
    }
    card_wallet.credit(&[CardAmount {
        card_type_id,
        count: amount,
    }])?;

    let minted = ctx.accounts.card_collection.card_type(card_type_id)?.minted;
    msg!("Minted {} of card type {} to {}", amount, card_type_id, to);
    emit!(CardsMinted {
        to,
        card_type_id,
        amount,
        paid: paid_amount,
        minted,
    });

    Ok(())
}

/// Mints `amounts[i]` cards to `recipients[i]` without payment. The supply
/// cap still applies to the whole batch.
pub fn process_airdrop<'info>(
    ctx: Context<'_, '_, 'info, 'info, Airdrop<'info>>,
    recipients: Vec<Pubkey>,
    card_type_id: u8,
    amounts: Vec<u64>,
) -> Result<()> {
    require_eq!(
        recipients.len(),
        amounts.len(),
        CardError::RecipientsMismatch
    );
    require_eq!(
        ctx.remaining_accounts.len(),
        recipients.len(),
        CardError::RecipientsMismatch
    );

    let total = amounts
        .iter()
        .try_fold(0u64, |acc, &x| acc.checked_add(x))
        .ok_or(CardError::MathOverflow)?;

    for (wallet_info, recipient) in ctx.remaining_accounts.iter().zip(&recipients) {
        let wallet = Account::<CardWallet>::try_from(wallet_info)?;
        require_keys_eq!(
            wallet.owner,
            *recipient,
            CardError::RecipientWalletMismatch
        );
    }

    ctx.accounts
        .card_collection
        .record_mint(card_type_id, total)?;

    // Wallets are reloaded one at a time so a recipient listed twice is
    // credited twice.
    for (wallet_info, &amount) in ctx.remaining_accounts.iter().zip(&amounts) {
        let mut wallet = Account::<CardWallet>::try_from(wallet_info)?;
        wallet.credit(&[CardAmount {
            card_type_id,
            count: amount,
        }])?;
        wallet.exit(&crate::ID)?;
    }

    msg!(
        "Airdropped {} of card type {} to {} recipients",
        total,
        card_type_id,
        recipients.len()
    );
    emit!(CardsAirdropped {
        card_type_id,
        recipients: recipients.len() as u32,
        total,
    });

    Ok(())
}
