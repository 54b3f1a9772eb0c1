use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod draw;
pub mod error;
pub mod events;
pub mod instructions;
pub mod payout;
pub mod state;
pub mod utils;

use state::JackpotSizeLimits;

declare_id!("LotGm5vR8wQ2nX7kH3pJ9sD4tF6yB1cE8aZ2uK5mWq7");

/// Pooled-entry lottery. Rounds fill up to a target jackpot, locked boost
/// cards raise a participant's ticket weight, and part of every round's tax
/// accumulates into a mega jackpot shared across rounds.
#[program]
pub mod lottery_game {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        team_wallet: Pubkey,
        card_collection: Pubkey,
    ) -> Result<()> {
        process_initialize(ctx, team_wallet, card_collection)
    }

    pub fn set_reward_distribution(
        ctx: Context<UpdateSettings>,
        tax_percent: u64,
        main_reward_percent: u64,
        random_ten_reward_percent: u64,
    ) -> Result<()> {
        process_set_reward_distribution(
            ctx,
            tax_percent,
            main_reward_percent,
            random_ten_reward_percent,
        )
    }

    pub fn set_mega_jackpot_fee(ctx: Context<UpdateSettings>, percent: u64) -> Result<()> {
        process_set_mega_jackpot_fee(ctx, percent)
    }

    pub fn set_team_share_percent(ctx: Context<UpdateSettings>, percent: u64) -> Result<()> {
        process_set_team_share_percent(ctx, percent)
    }

    pub fn set_entry_price(ctx: Context<UpdateSettings>, entry_price: u64) -> Result<()> {
        process_set_entry_price(ctx, entry_price)
    }

    pub fn set_jackpot_size_limits(ctx: Context<UpdateSettings>, min: u64, max: u64) -> Result<()> {
        process_set_jackpot_size_limits(ctx, min, max)
    }

    pub fn set_max_mega_jackpot(ctx: Context<UpdateSettings>, amount: u64) -> Result<()> {
        process_set_max_mega_jackpot(ctx, amount)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        process_emergency_withdraw(ctx)
    }

    pub fn start_game(ctx: Context<StartGame>, round_id: u64, target_jackpot: u64) -> Result<u64> {
        process_start_game(ctx, round_id, target_jackpot)
    }

    pub fn buy_tickets(
        ctx: Context<BuyTickets>,
        round_id: u64,
        card_type_ids: Vec<u8>,
        counts: Vec<u64>,
        seed: u64,
        amount: u64,
    ) -> Result<()> {
        process_buy_tickets(ctx, round_id, card_type_ids, counts, seed, amount)
    }

    pub fn commit_round_randomness(ctx: Context<CommitRoundRandomness>, round_id: u64) -> Result<()> {
        process_commit_round_randomness(ctx, round_id)
    }

    pub fn reward<'info>(
        ctx: Context<'_, '_, 'info, 'info, Reward<'info>>,
        round_id: u64,
    ) -> Result<()> {
        process_reward(ctx, round_id)
    }

    pub fn release_cards(ctx: Context<ReleaseCards>, round_id: u64) -> Result<()> {
        process_release_cards(ctx, round_id)
    }

    pub fn commit_mega_jackpot_randomness(ctx: Context<CommitMegaJackpotRandomness>) -> Result<()> {
        process_commit_mega_jackpot_randomness(ctx)
    }

    pub fn refresh_mega_jackpot(ctx: Context<RefreshMegaJackpot>) -> Result<()> {
        process_refresh_mega_jackpot(ctx)
    }

    pub fn get_tickets(ctx: Context<RoundView>, round_id: u64, player: Pubkey) -> Result<u64> {
        process_get_tickets(ctx, round_id, player)
    }

    pub fn get_game_current_size(ctx: Context<RoundView>, round_id: u64) -> Result<u64> {
        process_get_game_current_size(ctx, round_id)
    }

    pub fn get_active_game_indices(ctx: Context<GameStateView>) -> Result<Vec<u64>> {
        process_get_active_game_indices(ctx)
    }

    pub fn get_investor_list(ctx: Context<InvestorPageView>, page: u64) -> Result<Vec<Pubkey>> {
        process_get_investor_list(ctx, page)
    }

    pub fn get_investor_count(ctx: Context<MegaJackpotView>) -> Result<u64> {
        process_get_investor_count(ctx)
    }

    pub fn get_mega_jackpot(ctx: Context<MegaJackpotView>) -> Result<u64> {
        process_get_mega_jackpot(ctx)
    }

    pub fn get_jackpot_size_limits(ctx: Context<SettingsView>) -> Result<JackpotSizeLimits> {
        process_get_jackpot_size_limits(ctx)
    }
}
