use anchor_lang::prelude::*;
use lottery_card::program::LotteryCard;
use lottery_card::state::{CardCollection, CardWallet};

use crate::constants::*;
use crate::draw;
use crate::error::LotteryError;
use crate::events::{CardsReleased, GameRewarded, MegaJackpotContributed};
use crate::payout::split_pool;
use crate::state::*;
use crate::utils::{revealed_value, transfer_from_vault, unlock_cards, vault_spendable};

/// Accounts required to pay out a finished round. Owner only.
///
/// remaining_accounts, in order:
/// 1. the main winner's wallet
/// 2. the random ten winners' wallets, in draw order
/// 3. any number of `(Ticket, CardWallet)` pairs of boosted entrants whose
///    cards are handed back in the same call; the rest can be handed back
///    later with `release_cards`
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct Reward<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [SETTINGS_SEED],
        bump = settings.bump,
    )]
    pub settings: Box<Account<'info, LotterySettings>>,

    #[account(
        mut,
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

    #[account(
        mut,
        seeds = [MEGA_JACKPOT_SEED],
        bump = mega_jackpot.bump,
    )]
    pub mega_jackpot: Box<Account<'info, MegaJackpot>>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = game_state.vault_bump,
    )]
    pub vault: Account<'info, Vault>,

    /// CHECK: Only receives lamports; address is fixed in the game state.
    #[account(
        mut,
        address = game_state.team_wallet @ LotteryError::IncorrectTeamWallet,
    )]
    pub team_wallet: UncheckedAccount<'info>,

    /// The randomness oracle account committed for this round.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    #[account(
        address = game_state.card_collection @ LotteryError::IncorrectCardCollection,
    )]
    pub card_collection: Box<Account<'info, CardCollection>>,

    /// CHECK: PDA signer for the card unlock calls.
    #[account(
        seeds = [GAME_AUTHORITY_SEED],
        bump = game_state.authority_bump,
    )]
    pub game_authority: UncheckedAccount<'info>,

    pub card_program: Program<'info, LotteryCard>,
}

/// Accounts required to hand back the cards locked by one entry of a
/// rewarded round. Anyone may call it; cards only ever go back to their owner.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct ReleaseCards<'info> {
    #[account(
        seeds = [GAME_STATE_SEED],
        bump = game_state.bump,
    )]
    pub game_state: Box<Account<'info, GameState>>,

    #[account(
        mut,
        seeds = [ROUND_SEED, round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, Round>>,

    #[account(
        mut,
        seeds = [TICKET_SEED, round_id.to_le_bytes().as_ref(), ticket.player.as_ref()],
        bump = ticket.bump,
    )]
    pub ticket: Box<Account<'info, Ticket>>,

    #[account(
        address = game_state.card_collection @ LotteryError::IncorrectCardCollection,
    )]
    pub card_collection: Box<Account<'info, CardCollection>>,

    #[account(
        mut,
        constraint = card_wallet.owner == ticket.player @ LotteryError::LockedEntryMismatch,
    )]
    pub card_wallet: Account<'info, CardWallet>,

    /// CHECK: PDA signer for the card unlock call.
    #[account(
        seeds = [GAME_AUTHORITY_SEED],
        bump = game_state.authority_bump,
    )]
    pub game_authority: UncheckedAccount<'info>,

    pub card_program: Program<'info, LotteryCard>,
}

/// Winners of a round: the main winner and up to ten random winners.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Winners {
    pub main: Pubkey,
    pub random_ten: Vec<Pubkey>,
}

/// Draws the main winner weighted by tickets and the random ten uniformly,
/// without repeats.
pub fn draw_winners(participants: &[Participant], randomness: &[u8; 32]) -> Result<Winners> {
    let main = participants[draw::pick_weighted(participants, randomness)?].player;
    let random_ten = draw::pick_distinct(participants.len(), RANDOM_TEN_WINNERS, randomness)
        .into_iter()
        .map(|i| participants[i].player)
        .collect();
    Ok(Winners { main, random_ten })
}

/// Pays out a finished round.
///
/// Steps performed:
/// 1. Check the round is finished and the committed randomness is revealed.
/// 2. Split the pool and draw the winners.
/// 3. Check the payout accounts match the draw and the vault can pay.
/// 4. Pay the winners and the team, feed the mega jackpot.
/// 5. Hand back the locked cards passed in `remaining_accounts`.
/// 6. Mark the round rewarded.
pub fn process_reward<'info>(
    ctx: Context<'_, '_, 'info, 'info, Reward<'info>>,
    round_id: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let round = &ctx.accounts.round;

    round.check_rewardable()?;
    require_keys_eq!(
        ctx.accounts.randomness_account_data.key(),
        round.randomness_account,
        LotteryError::IncorrectRandomnessAccount
    );

    let revealed = revealed_value(&ctx.accounts.randomness_account_data, &clock)?;
    let randomness = draw::randomness(&round.entropy, &revealed);

    let pool = round.current_size;
    let split = split_pool(
        pool,
        &ctx.accounts.settings,
        ctx.accounts.mega_jackpot.amount,
        round.participants.len(),
    )?;
    let winners = draw_winners(&round.participants, &randomness)?;

    let remaining = ctx.remaining_accounts;
    let winner_count = 1 + winners.random_ten.len();
    require!(
        remaining.len() >= winner_count && (remaining.len() - winner_count) % 2 == 0,
        LotteryError::WinnerAccountMismatch
    );
    let (winner_accounts, locked_accounts) = remaining.split_at(winner_count);
    require_keys_eq!(
        winner_accounts[0].key(),
        winners.main,
        LotteryError::WinnerAccountMismatch
    );
    for (account, winner) in winner_accounts[1..].iter().zip(&winners.random_ten) {
        require_keys_eq!(account.key(), *winner, LotteryError::WinnerAccountMismatch);
    }

    let vault = ctx.accounts.vault.to_account_info();
    require!(
        vault_spendable(&vault)? >= split.paid_out()?,
        LotteryError::VaultShortfall
    );

    msg!("Round {} pool {} lamports", round_id, pool);

    transfer_from_vault(&vault, &winner_accounts[0], split.main_reward)?;
    msg!("Main reward {} to {}", split.main_reward, winners.main);
    for account in &winner_accounts[1..] {
        transfer_from_vault(&vault, account, split.random_ten_each)?;
    }
    transfer_from_vault(
        &vault,
        &ctx.accounts.team_wallet.to_account_info(),
        split.team_share,
    )?;

    let mega_jackpot = &mut ctx.accounts.mega_jackpot;
    mega_jackpot.contribute(split.mega_contribution)?;
    msg!("Mega jackpot +{} = {}", split.mega_contribution, mega_jackpot.amount);
    emit!(MegaJackpotContributed {
        round_id,
        amount: split.mega_contribution,
        total: mega_jackpot.amount,
    });

    let mut released = 0u32;
    for pair in locked_accounts.chunks(2) {
        let mut ticket = Account::<Ticket>::try_from(&pair[0])?;
        require_eq!(ticket.round_id, round_id, LotteryError::LockedEntryMismatch);
        let card_wallet = Account::<CardWallet>::try_from(&pair[1])?;
        require_keys_eq!(
            card_wallet.owner,
            ticket.player,
            LotteryError::LockedEntryMismatch
        );

        let cards = ticket.release()?;
        unlock_cards(
            ctx.accounts.card_program.to_account_info(),
            ctx.accounts.card_collection.to_account_info(),
            ctx.accounts.game_authority.to_account_info(),
            pair[1].clone(),
            ctx.accounts.game_state.authority_bump,
            ticket.player,
            &cards,
        )?;
        ticket.exit(&crate::ID)?;
        released += 1;

        emit!(CardsReleased {
            round_id,
            player: ticket.player,
            cards,
        });
    }

    let round = &mut ctx.accounts.round;
    round.released_entrants += released;
    round.state = RoundState::Rewarded;
    ctx.accounts.game_state.release(pool);

    msg!(
        "Round {} rewarded, cards handed back for {} of {} boosted entrants",
        round_id,
        round.released_entrants,
        round.boosted_entrants
    );
    emit!(GameRewarded {
        round_id,
        pool,
        main_winner: winners.main,
        main_reward: split.main_reward,
        random_ten_winners: winners.random_ten,
        random_ten_each: split.random_ten_each,
        team_share: split.team_share,
        retained: split.retained,
    });

    Ok(())
}

/// Hands back the cards one entry locked in a rewarded round.
pub fn process_release_cards(ctx: Context<ReleaseCards>, round_id: u64) -> Result<()> {
    require!(
        ctx.accounts.round.state == RoundState::Rewarded,
        LotteryError::GameNotRewarded
    );

    let ticket = &mut ctx.accounts.ticket;
    let cards = ticket.release()?;
    unlock_cards(
        ctx.accounts.card_program.to_account_info(),
        ctx.accounts.card_collection.to_account_info(),
        ctx.accounts.game_authority.to_account_info(),
        ctx.accounts.card_wallet.to_account_info(),
        ctx.accounts.game_state.authority_bump,
        ticket.player,
        &cards,
    )?;

    let round = &mut ctx.accounts.round;
    round.released_entrants += 1;

    msg!("Cards of {} released from round {}", ticket.player, round_id);
    if round.all_cards_released() {
        msg!("Every card locked in round {} is released", round_id);
    }
    emit!(CardsReleased {
        round_id,
        player: ticket.player,
        cards,
    });

    Ok(())
}
