use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::LotteryError;
use crate::events::GameStarted;
use crate::state::*;

/// Accounts required to open a new round. Owner only.
///
/// `round_id` must be the next id, `game_state.last_round_id + 1`; the
/// round account address is derived from it.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct StartGame<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
    )]
    pub settings: Account<'info, LotterySettings>,

    #[account(
        mut,
        seeds = [GAME_STATE_SEED],
        bump = game_state.bump,
        constraint = game_state.authority == authority.key() @ LotteryError::NotAuthorized,
    )]
    pub game_state: Box<Account<'info, GameState>>,

    #[account(
        init,
        payer = authority,
        space = 8 + Round::INIT_SPACE,
        seeds = [ROUND_SEED, round_id.to_le_bytes().as_ref()],
        bump
    )]
    pub round: Box<Account<'info, Round>>,

    pub system_program: Program<'info, System>,
}

/// Starts a round that finishes once `target_jackpot` lamports are entered.
/// Returns the new round id.
pub fn process_start_game(
    ctx: Context<StartGame>,
    round_id: u64,
    target_jackpot: u64,
) -> Result<u64> {
    let settings = &ctx.accounts.settings;
    settings.check_target_jackpot(target_jackpot)?;

    let game_state = &mut ctx.accounts.game_state;
    require_eq!(
        round_id,
        game_state.last_round_id.saturating_add(1),
        LotteryError::InvalidRoundId
    );
    game_state.open_round()?;

    let entry_price = settings.entry_price;
    ctx.accounts
        .round
        .start(round_id, target_jackpot, entry_price, ctx.bumps.round);

    msg!(
        "Round {} started, target {} lamports, entry {}",
        round_id,
        target_jackpot,
        entry_price
    );
    emit!(GameStarted {
        round_id,
        target_jackpot,
        entry_price,
    });

    Ok(round_id)
}
