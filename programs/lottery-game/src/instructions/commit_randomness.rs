use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::LotteryError;
use crate::events::RandomnessCommitted;
use crate::state::*;
use crate::utils::check_unrevealed;

/// Accounts required to bind a randomness account to a finished round.
///
/// Ensures:
/// 1. Only the owner can commit the randomness.
/// 2. The round is waiting for its reward and has no randomness bound yet.
/// 3. The randomness account is a Switchboard account not revealed yet.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct CommitRoundRandomness<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [GAME_STATE_SEED],
        bump = game_state.bump,
        constraint = game_state.authority == authority.key() @ LotteryError::NotAuthorized,
    )]
    pub game_state: Box<Account<'info, GameState>>,

    #[account(
        mut,
        seeds = [ROUND_SEED, round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, Round>>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Accounts required to bind a randomness account to the next mega jackpot draw.
#[derive(Accounts)]
pub struct CommitMegaJackpotRandomness<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [GAME_STATE_SEED],
        bump = game_state.bump,
        constraint = game_state.authority == authority.key() @ LotteryError::NotAuthorized,
    )]
    pub game_state: Box<Account<'info, GameState>>,

    #[account(
        mut,
        seeds = [MEGA_JACKPOT_SEED],
        bump = mega_jackpot.bump,
    )]
    pub mega_jackpot: Box<Account<'info, MegaJackpot>>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_commit_round_randomness(
    ctx: Context<CommitRoundRandomness>,
    round_id: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let round = &mut ctx.accounts.round;
    round.check_rewardable()?;
    round.check_uncommitted()?;

    let randomness_account = &ctx.accounts.randomness_account_data;
    check_unrevealed(randomness_account, &clock)?;
    round.randomness_account = randomness_account.key();

    msg!(
        "Round {} committed to randomness {}",
        round_id,
        round.randomness_account
    );
    emit!(RandomnessCommitted {
        round_id,
        randomness_account: round.randomness_account,
    });

    Ok(())
}

pub fn process_commit_mega_jackpot_randomness(
    ctx: Context<CommitMegaJackpotRandomness>,
) -> Result<()> {
    let clock = Clock::get()?;
    let mega_jackpot = &mut ctx.accounts.mega_jackpot;
    mega_jackpot.check_uncommitted()?;

    let randomness_account = &ctx.accounts.randomness_account_data;
    check_unrevealed(randomness_account, &clock)?;
    mega_jackpot.randomness_account = randomness_account.key();

    msg!(
        "Mega jackpot committed to randomness {}",
        mega_jackpot.randomness_account
    );
    emit!(RandomnessCommitted {
        round_id: 0,
        randomness_account: mega_jackpot.randomness_account,
    });

    Ok(())
}
