use anchor_lang::prelude::*;
use lottery_card::state::CardAmount;

#[event]
pub struct GameInitialized {
    pub authority: Pubkey,
    pub team_wallet: Pubkey,
    pub card_collection: Pubkey,
}

#[event]
pub struct SettingsUpdated {
    pub tax_percent: u64,
    pub main_reward_percent: u64,
    pub random_ten_reward_percent: u64,
    pub mega_jackpot_fee_percent: u64,
    pub team_share_percent: u64,
    pub entry_price: u64,
    pub min_jackpot_size: u64,
    pub max_jackpot_size: u64,
    pub max_mega_jackpot: u64,
}

#[event]
pub struct GameStarted {
    pub round_id: u64,
    pub target_jackpot: u64,
    pub entry_price: u64,
}

#[event]
pub struct TicketsBought {
    pub round_id: u64,
    pub player: Pubkey,
    pub tickets: u64,
    pub locked_cards: Vec<CardAmount>,
    pub current_size: u64,
}

#[event]
pub struct GameFinished {
    pub round_id: u64,
    pub current_size: u64,
    pub participants: u32,
}

#[event]
pub struct RandomnessCommitted {
    /// Zero for the mega jackpot draw.
    pub round_id: u64,
    pub randomness_account: Pubkey,
}

#[event]
pub struct GameRewarded {
    pub round_id: u64,
    pub pool: u64,
    pub main_winner: Pubkey,
    pub main_reward: u64,
    pub random_ten_winners: Vec<Pubkey>,
    pub random_ten_each: u64,
    pub team_share: u64,
    pub retained: u64,
}

#[event]
pub struct CardsReleased {
    pub round_id: u64,
    pub player: Pubkey,
    pub cards: Vec<CardAmount>,
}

#[event]
pub struct MegaJackpotContributed {
    pub round_id: u64,
    pub amount: u64,
    pub total: u64,
}

#[event]
pub struct MegaJackpotRefreshed {
    pub winner: Pubkey,
    pub amount: u64,
    pub investors: u64,
}

#[event]
pub struct EmergencyWithdrawn {
    pub to: Pubkey,
    pub amount: u64,
}
