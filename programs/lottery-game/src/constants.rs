pub const SETTINGS_SEED: &[u8] = b"lottery_settings";
pub const GAME_STATE_SEED: &[u8] = b"game_state";
pub const GAME_AUTHORITY_SEED: &[u8] = b"game_authority";
pub const VAULT_SEED: &[u8] = b"vault";
pub const ROUND_SEED: &[u8] = b"round";
pub const TICKET_SEED: &[u8] = b"ticket";
pub const MEGA_JACKPOT_SEED: &[u8] = b"mega_jackpot";
pub const INVESTOR_SEED: &[u8] = b"investor";
pub const INVESTOR_PAGE_SEED: &[u8] = b"investor_page";

/// Fixed-point denominator for every percentage setting.
pub const SCALE: u64 = 10_000;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

// Settings at deployment
pub const DEFAULT_TAX_PERCENT: u64 = 1_000;
pub const DEFAULT_MAIN_REWARD_PERCENT: u64 = 8_000;
pub const DEFAULT_RANDOM_TEN_REWARD_PERCENT: u64 = 1_000;
pub const DEFAULT_MEGA_JACKPOT_FEE_PERCENT: u64 = 5_000;
pub const DEFAULT_TEAM_SHARE_PERCENT: u64 = 5_000;
pub const DEFAULT_ENTRY_PRICE: u64 = LAMPORTS_PER_SOL / 20;
pub const DEFAULT_MIN_JACKPOT_SIZE: u64 = LAMPORTS_PER_SOL;
pub const DEFAULT_MAX_JACKPOT_SIZE: u64 = 10 * LAMPORTS_PER_SOL;
pub const DEFAULT_MAX_MEGA_JACKPOT: u64 = 100 * LAMPORTS_PER_SOL;

pub const RANDOM_TEN_WINNERS: usize = 10;

pub const MAX_PARTICIPANTS: usize = 200;
pub const MAX_ACTIVE_ROUNDS: usize = 32;
/// Investors stored per registry page; one page fits in a view's return data.
pub const INVESTORS_PER_PAGE: usize = 31;
pub const MAX_LOCKED_ENTRIES: usize = lottery_card::constants::MAX_CARD_TYPES;
