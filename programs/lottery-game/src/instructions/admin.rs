use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::LotteryError;
use crate::events::*;
use crate::payout::withdrawable;
use crate::state::*;
use crate::utils::{transfer_from_vault, vault_spendable};

/// Accounts required to set up the lottery.
/// Creates the settings, the game state, the vault and the mega jackpot.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Becomes the owner of the lottery.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + LotterySettings::INIT_SPACE,
        seeds = [SETTINGS_SEED],
        bump
    )]
    pub settings: Box<Account<'info, LotterySettings>>,

    #[account(
        init,
        payer = authority,
        space = 8 + GameState::INIT_SPACE,
        seeds = [GAME_STATE_SEED],
        bump
    )]
    pub game_state: Box<Account<'info, GameState>>,

    /// Lamport escrow, owned by this program.
    #[account(
        init,
        payer = authority,
        space = 8 + Vault::INIT_SPACE,
        seeds = [VAULT_SEED],
        bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        init,
        payer = authority,
        space = 8 + MegaJackpot::INIT_SPACE,
        seeds = [MEGA_JACKPOT_SEED],
        bump
    )]
    pub mega_jackpot: Box<Account<'info, MegaJackpot>>,

    /// CHECK: PDA that signs card lock/unlock calls. Holds no data.
    #[account(seeds = [GAME_AUTHORITY_SEED], bump)]
    pub game_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Accounts required to change a setting. Owner only.
#[derive(Accounts)]
pub struct UpdateSettings<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
        constraint = settings.authority == authority.key() @ LotteryError::NotAuthorized,
    )]
    pub settings: Account<'info, LotterySettings>,
}

/// Accounts required to withdraw unencumbered vault funds. Owner only.
#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [GAME_STATE_SEED],
        bump = game_state.bump,
        constraint = game_state.authority == authority.key() @ LotteryError::NotAuthorized,
    )]
    pub game_state: Box<Account<'info, GameState>>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = game_state.vault_bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        seeds = [MEGA_JACKPOT_SEED],
        bump = mega_jackpot.bump,
    )]
    pub mega_jackpot: Box<Account<'info, MegaJackpot>>,
}

/// Initializes the lottery with default settings.
///
/// # Arguments
/// * `team_wallet` - receives the team share of every round's tax
/// * `card_collection` - card collection whose cards boost tickets
pub fn process_initialize(
    ctx: Context<Initialize>,
    team_wallet: Pubkey,
    card_collection: Pubkey,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();

    ctx.accounts
        .settings
        .reset(authority, ctx.bumps.settings);

    let game_state = &mut ctx.accounts.game_state;
    game_state.authority = authority;
    game_state.team_wallet = team_wallet;
    game_state.card_collection = card_collection;
    game_state.last_round_id = 0;
    game_state.active_rounds = Vec::new();
    game_state.committed_pool = 0;
    game_state.bump = ctx.bumps.game_state;
    game_state.vault_bump = ctx.bumps.vault;
    game_state.authority_bump = ctx.bumps.game_authority;

    ctx.accounts.vault.bump = ctx.bumps.vault;

    let mega_jackpot = &mut ctx.accounts.mega_jackpot;
    mega_jackpot.amount = 0;
    mega_jackpot.epoch = 0;
    mega_jackpot.investor_count = 0;
    mega_jackpot.entropy = [0u8; 32];
    mega_jackpot.randomness_account = Pubkey::default();
    mega_jackpot.bump = ctx.bumps.mega_jackpot;

    msg!(
        "Lottery initialized, card lock authority {}",
        ctx.accounts.game_authority.key()
    );
    emit!(GameInitialized {
        authority,
        team_wallet,
        card_collection,
    });

    Ok(())
}

fn settings_updated(settings: &LotterySettings) {
    emit!(SettingsUpdated {
        tax_percent: settings.tax_percent,
        main_reward_percent: settings.main_reward_percent,
        random_ten_reward_percent: settings.random_ten_reward_percent,
        mega_jackpot_fee_percent: settings.mega_jackpot_fee_percent,
        team_share_percent: settings.team_share_percent,
        entry_price: settings.entry_price,
        min_jackpot_size: settings.min_jackpot_size,
        max_jackpot_size: settings.max_jackpot_size,
        max_mega_jackpot: settings.max_mega_jackpot,
    });
}

pub fn process_set_reward_distribution(
    ctx: Context<UpdateSettings>,
    tax_percent: u64,
    main_reward_percent: u64,
    random_ten_reward_percent: u64,
) -> Result<()> {
    let settings = &mut ctx.accounts.settings;
    settings.set_reward_distribution(tax_percent, main_reward_percent, random_ten_reward_percent)?;
    msg!(
        "Reward distribution: tax {}, main {}, random ten {}",
        tax_percent,
        main_reward_percent,
        random_ten_reward_percent
    );
    settings_updated(settings);
    Ok(())
}

pub fn process_set_mega_jackpot_fee(ctx: Context<UpdateSettings>, percent: u64) -> Result<()> {
    let settings = &mut ctx.accounts.settings;
    settings.set_mega_jackpot_fee(percent)?;
    msg!("Mega jackpot fee: {}", percent);
    settings_updated(settings);
    Ok(())
}

pub fn process_set_team_share_percent(ctx: Context<UpdateSettings>, percent: u64) -> Result<()> {
    let settings = &mut ctx.accounts.settings;
    settings.set_team_share_percent(percent)?;
    msg!("Team share: {}", percent);
    settings_updated(settings);
    Ok(())
}

pub fn process_set_entry_price(ctx: Context<UpdateSettings>, entry_price: u64) -> Result<()> {
    let settings = &mut ctx.accounts.settings;
    settings.set_entry_price(entry_price)?;
    msg!("Entry price: {}", entry_price);
    settings_updated(settings);
    Ok(())
}

pub fn process_set_jackpot_size_limits(
    ctx: Context<UpdateSettings>,
    min: u64,
    max: u64,
) -> Result<()> {
    let settings = &mut ctx.accounts.settings;
    settings.set_jackpot_size_limits(min, max)?;
    msg!("Jackpot size limits: {} - {}", min, max);
    settings_updated(settings);
    Ok(())
}

pub fn process_set_max_mega_jackpot(ctx: Context<UpdateSettings>, amount: u64) -> Result<()> {
    let settings = &mut ctx.accounts.settings;
    settings.set_max_mega_jackpot(amount)?;
    msg!("Max mega jackpot: {}", amount);
    settings_updated(settings);
    Ok(())
}

/// Sends the owner everything the vault holds beyond rent, entry fees of
/// unrewarded rounds and the mega jackpot.
pub fn process_emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    let vault = ctx.accounts.vault.to_account_info();
    let amount = withdrawable(
        vault_spendable(&vault)?,
        ctx.accounts.game_state.committed_pool,
        ctx.accounts.mega_jackpot.amount,
    )?;

    transfer_from_vault(&vault, &ctx.accounts.authority.to_account_info(), amount)?;

    msg!("Emergency withdrawal of {} lamports", amount);
    emit!(EmergencyWithdrawn {
        to: ctx.accounts.authority.key(),
        amount,
    });

    Ok(())
}
