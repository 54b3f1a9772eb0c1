use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::CardError;
use crate::events::*;
use crate::state::*;

/// Accounts required to create the card collection.
#[derive(Accounts)]
pub struct InitializeCollection<'info> {
    /// Pays for the account and becomes the collection owner.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + CardCollection::INIT_SPACE,
        seeds = [CARD_COLLECTION_SEED],
        bump
    )]
    pub card_collection: Account<'info, CardCollection>,

    pub system_program: Program<'info, System>,
}

/// Accounts for every owner-only change to the collection.
#[derive(Accounts)]
pub struct UpdateCollection<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CARD_COLLECTION_SEED],
        bump = card_collection.bump,
        constraint = card_collection.authority == authority.key() @ CardError::NotAuthorized,
    )]
    pub card_collection: Account<'info, CardCollection>,
}

#[derive(Accounts)]
pub struct WithdrawProceeds<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CARD_COLLECTION_SEED],
        bump = card_collection.bump,
        constraint = card_collection.authority == authority.key() @ CardError::NotAuthorized,
    )]
    pub card_collection: Account<'info, CardCollection>,
}

/// Creates the collection with an empty card type list. No lottery game is
/// allowed to lock cards until `set_lottery_game` is called.
pub fn process_initialize_collection(
    ctx: Context<InitializeCollection>,
    base_uri: String,
) -> Result<()> {
    let card_collection = &mut ctx.accounts.card_collection;
    card_collection.authority = ctx.accounts.payer.key();
    card_collection.lottery_game = Pubkey::default();
    card_collection.card_types = Vec::new();
    card_collection.bump = ctx.bumps.card_collection;
    card_collection.set_base_uri(base_uri)?;

    msg!("Card collection {} ({}) initialized", NAME, SYMBOL);
    emit!(CollectionInitialized {
        authority: card_collection.authority,
        name: NAME.to_string(),
        symbol: SYMBOL.to_string(),
        base_uri: card_collection.base_uri.clone(),
    });

    Ok(())
}

/// Allow-lists the signer that may lock and unlock cards.
///
/// # Arguments
/// * `lottery_game` - the game program's authority PDA
pub fn process_set_lottery_game(ctx: Context<UpdateCollection>, lottery_game: Pubkey) -> Result<()> {
    ctx.accounts.card_collection.lottery_game = lottery_game;

    msg!("Lottery game set to {}", lottery_game);
    emit!(LotteryGameSet { lottery_game });

    Ok(())
}

pub fn process_add_card_type(
    ctx: Context<UpdateCollection>,
    tier: CardTier,
    price: u64,
    supply_cap: u64,
) -> Result<()> {
    let card_type_id = ctx
        .accounts
        .card_collection
        .add_card_type(tier, price, supply_cap)?;

    msg!("Card type {} added", card_type_id);
    emit!(CardTypeAdded {
        card_type_id,
        tier,
        price,
        supply_cap,
    });

    Ok(())
}

pub fn process_set_token_price(
    ctx: Context<UpdateCollection>,
    price: u64,
    card_type_id: u8,
) -> Result<()> {
    ctx.accounts
        .card_collection
        .set_token_price(card_type_id, price)?;

    emit!(TokenPriceSet {
        card_type_id,
        price,
    });

    Ok(())
}

pub fn process_set_base_uri(ctx: Context<UpdateCollection>, base_uri: String) -> Result<()> {
    ctx.accounts.card_collection.set_base_uri(base_uri)?;

    emit!(BaseUriSet {
        base_uri: ctx.accounts.card_collection.base_uri.clone(),
    });

    Ok(())
}

/// Sends mint payments held by the collection account to the owner, keeping
/// the account rent exempt.
pub fn process_withdraw_proceeds(ctx: Context<WithdrawProceeds>) -> Result<()> {
    let collection_info = ctx.accounts.card_collection.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(collection_info.data_len());
    let amount = collection_info.lamports().saturating_sub(rent_floor);
    require!(amount > 0, CardError::NoProceeds);

    **collection_info.try_borrow_mut_lamports()? -= amount;
    **ctx
        .accounts
        .authority
        .to_account_info()
        .try_borrow_mut_lamports()? += amount;

    msg!("Withdrew {} lamports of proceeds", amount);
    emit!(ProceedsWithdrawn {
        authority: ctx.accounts.authority.key(),
        amount,
    });

    Ok(())
}
