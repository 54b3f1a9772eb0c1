use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::*;

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct RoundView<'info> {
    #[account(
        seeds = [ROUND_SEED, round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, Round>>,
}

#[derive(Accounts)]
pub struct GameStateView<'info> {
    #[account(
        seeds = [GAME_STATE_SEED],
        bump = game_state.bump,
    )]
    pub game_state: Box<Account<'info, GameState>>,
}

#[derive(Accounts)]
pub struct MegaJackpotView<'info> {
    #[account(
        seeds = [MEGA_JACKPOT_SEED],
        bump = mega_jackpot.bump,
    )]
    pub mega_jackpot: Box<Account<'info, MegaJackpot>>,
}

/// One page of the current epoch's investor registry.
#[derive(Accounts)]
#[instruction(page: u64)]
pub struct InvestorPageView<'info> {
    #[account(
        seeds = [MEGA_JACKPOT_SEED],
        bump = mega_jackpot.bump,
    )]
    pub mega_jackpot: Box<Account<'info, MegaJackpot>>,

    #[account(
        seeds = [
            INVESTOR_PAGE_SEED,
            mega_jackpot.epoch.to_le_bytes().as_ref(),
            page.to_le_bytes().as_ref(),
        ],
        bump = investor_page.bump,
    )]
    pub investor_page: Box<Account<'info, InvestorPage>>,
}

#[derive(Accounts)]
pub struct SettingsView<'info> {
    #[account(
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
    )]
    pub settings: Account<'info, LotterySettings>,
}

/// Ticket weight of `player` in the round, zero if they did not enter.
pub fn process_get_tickets(ctx: Context<RoundView>, _round_id: u64, player: Pubkey) -> Result<u64> {
    Ok(ctx.accounts.round.tickets_of(&player))
}

pub fn process_get_game_current_size(ctx: Context<RoundView>, _round_id: u64) -> Result<u64> {
    Ok(ctx.accounts.round.current_size)
}

pub fn process_get_active_game_indices(ctx: Context<GameStateView>) -> Result<Vec<u64>> {
    Ok(ctx.accounts.game_state.active_rounds.clone())
}

/// Investors stored on registry page `page`, at most `INVESTORS_PER_PAGE`.
/// Pages run from 0 to `(get_investor_count() - 1) / INVESTORS_PER_PAGE`.
pub fn process_get_investor_list(
    ctx: Context<InvestorPageView>,
    _page: u64,
) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.investor_page.investors.clone())
}

pub fn process_get_investor_count(ctx: Context<MegaJackpotView>) -> Result<u64> {
    Ok(ctx.accounts.mega_jackpot.investor_count)
}

pub fn process_get_mega_jackpot(ctx: Context<MegaJackpotView>) -> Result<u64> {
    Ok(ctx.accounts.mega_jackpot.amount)
}

pub fn process_get_jackpot_size_limits(ctx: Context<SettingsView>) -> Result<JackpotSizeLimits> {
    Ok(ctx.accounts.settings.jackpot_size_limits())
}
