use anchor_lang::prelude::*;
use lottery_card::state::CardAmount;

use crate::constants::*;
use crate::draw;
use crate::error::LotteryError;

/// Percentages, prices and bounds read by every game operation.
/// Percentages are fixed point over `SCALE`.
#[account]
#[derive(InitSpace)]
pub struct LotterySettings {
    /// The only signer allowed to change settings.
    pub authority: Pubkey,

    /// Share of the pool taken as tax. Part of it feeds the mega jackpot.
    pub tax_percent: u64,

    /// Share of the pool paid to the main winner.
    pub main_reward_percent: u64,

    /// Share of the pool split among up to ten random participants.
    pub random_ten_reward_percent: u64,

    /// Share of the tax added to the mega jackpot.
    pub mega_jackpot_fee_percent: u64,

    /// Share of the tax remainder paid to the team wallet.
    pub team_share_percent: u64,

    /// Lamports a participant pays to enter a round.
    pub entry_price: u64,

    pub min_jackpot_size: u64,
    pub max_jackpot_size: u64,

    /// Ceiling for the accumulated mega jackpot.
    pub max_mega_jackpot: u64,

    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct JackpotSizeLimits {
    pub min: u64,
    pub max: u64,
}

impl LotterySettings {
    pub fn reset(&mut self, authority: Pubkey, bump: u8) {
        self.authority = authority;
        self.tax_percent = DEFAULT_TAX_PERCENT;
        self.main_reward_percent = DEFAULT_MAIN_REWARD_PERCENT;
        self.random_ten_reward_percent = DEFAULT_RANDOM_TEN_REWARD_PERCENT;
        self.mega_jackpot_fee_percent = DEFAULT_MEGA_JACKPOT_FEE_PERCENT;
        self.team_share_percent = DEFAULT_TEAM_SHARE_PERCENT;
        self.entry_price = DEFAULT_ENTRY_PRICE;
        self.min_jackpot_size = DEFAULT_MIN_JACKPOT_SIZE;
        self.max_jackpot_size = DEFAULT_MAX_JACKPOT_SIZE;
        self.max_mega_jackpot = DEFAULT_MAX_MEGA_JACKPOT;
        self.bump = bump;
    }

    pub fn set_reward_distribution(
        &mut self,
        tax_percent: u64,
        main_reward_percent: u64,
        random_ten_reward_percent: u64,
    ) -> Result<()> {
        require!(tax_percent <= SCALE, LotteryError::TaxPercentTooHigh);
        require!(
            main_reward_percent <= SCALE,
            LotteryError::MainRewardPercentTooHigh
        );
        require!(
            random_ten_reward_percent <= SCALE,
            LotteryError::RandomTenRewardPercentTooHigh
        );
        require!(
            tax_percent + main_reward_percent + random_ten_reward_percent <= SCALE,
            LotteryError::RewardDistributionTooHigh
        );

        self.tax_percent = tax_percent;
        self.main_reward_percent = main_reward_percent;
        self.random_ten_reward_percent = random_ten_reward_percent;
        Ok(())
    }

    pub fn set_mega_jackpot_fee(&mut self, percent: u64) -> Result<()> {
        require!(percent <= SCALE, LotteryError::MegaJackpotFeeTooHigh);
        self.mega_jackpot_fee_percent = percent;
        Ok(())
    }

    pub fn set_team_share_percent(&mut self, percent: u64) -> Result<()> {
        require!(percent <= SCALE, LotteryError::TeamSharePercentTooHigh);
        self.team_share_percent = percent;
        Ok(())
    }

    pub fn set_entry_price(&mut self, entry_price: u64) -> Result<()> {
        require!(entry_price > 0, LotteryError::InvalidEntryPrice);
        self.entry_price = entry_price;
        Ok(())
    }

    pub fn set_jackpot_size_limits(&mut self, min: u64, max: u64) -> Result<()> {
        require!(min > 0, LotteryError::InvalidMinJackpotSize);
        require!(max >= min, LotteryError::InvalidMaxJackpotSize);
        self.min_jackpot_size = min;
        self.max_jackpot_size = max;
        Ok(())
    }

    pub fn set_max_mega_jackpot(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, LotteryError::InvalidMaxMegaJackpot);
        self.max_mega_jackpot = amount;
        Ok(())
    }

    pub fn jackpot_size_limits(&self) -> JackpotSizeLimits {
        JackpotSizeLimits {
            min: self.min_jackpot_size,
            max: self.max_jackpot_size,
        }
    }

    /// A target must lie within the size limits and be reachable by one
    /// round's participants at the current entry price.
    pub fn check_target_jackpot(&self, target_jackpot: u64) -> Result<()> {
        require!(
            (self.min_jackpot_size..=self.max_jackpot_size).contains(&target_jackpot),
            LotteryError::JackpotSizeOutOfRange
        );
        let capacity = self
            .entry_price
            .checked_mul(MAX_PARTICIPANTS as u64)
            .ok_or(LotteryError::MathOverflow)?;
        require!(
            target_jackpot <= capacity,
            LotteryError::TargetExceedsCapacity
        );
        Ok(())
    }
}

/// Program-wide bookkeeping shared by every round.
#[account]
#[derive(InitSpace)]
pub struct GameState {
    /// Owner allowed to start, reward and withdraw.
    pub authority: Pubkey,

    /// Receives the team share of every round's tax.
    pub team_wallet: Pubkey,

    /// Card collection whose cards boost tickets.
    pub card_collection: Pubkey,

    /// Id of the most recently started round. Ids start at 1.
    pub last_round_id: u64,

    /// Rounds still accepting entries.
    #[max_len(MAX_ACTIVE_ROUNDS)]
    pub active_rounds: Vec<u64>,

    /// Entry fees held for rounds that are not rewarded yet.
    pub committed_pool: u64,

    pub bump: u8,
    pub vault_bump: u8,
    pub authority_bump: u8,
}

impl GameState {
    pub fn open_round(&mut self) -> Result<u64> {
        require!(
            self.active_rounds.len() < MAX_ACTIVE_ROUNDS,
            LotteryError::TooManyActiveGames
        );
        let round_id = self
            .last_round_id
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;
        self.last_round_id = round_id;
        self.active_rounds.push(round_id);
        Ok(round_id)
    }

    pub fn deactivate_round(&mut self, round_id: u64) {
        self.active_rounds.retain(|&id| id != round_id);
    }

    pub fn commit(&mut self, amount: u64) -> Result<()> {
        self.committed_pool = self
            .committed_pool
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;
        Ok(())
    }

    pub fn release(&mut self, amount: u64) {
        self.committed_pool = self.committed_pool.saturating_sub(amount);
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum RoundState {
    /// Accepting entries. A round is active as soon as it is started.
    Active,
    /// Target reached; waiting for rewards.
    Finished,
    Rewarded,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct Participant {
    pub player: Pubkey,
    pub tickets: u64,
}

/// One lottery round. Never closed, kept as history.
#[account]
#[derive(InitSpace)]
pub struct Round {
    pub round_id: u64,

    pub state: RoundState,

    /// Pool size at which the round finishes.
    pub target_jackpot: u64,

    /// Entry price when the round started; later price changes do not apply.
    pub entry_price: u64,

    /// `entry_price * participants.len()` until the round is rewarded.
    pub current_size: u64,

    /// Distinct participants in entry order with their ticket weight.
    #[max_len(MAX_PARTICIPANTS)]
    pub participants: Vec<Participant>,

    /// Participants that locked cards for this round.
    pub boosted_entrants: u32,

    /// Boosted entrants whose cards were handed back.
    pub released_entrants: u32,

    /// Hash chain over every participant's seed.
    pub entropy: [u8; 32],

    /// Switchboard randomness account committed for the reward draw.
    pub randomness_account: Pubkey,

    pub bump: u8,
}

impl Round {
    pub fn start(&mut self, round_id: u64, target_jackpot: u64, entry_price: u64, bump: u8) {
        self.round_id = round_id;
        self.state = RoundState::Active;
        self.target_jackpot = target_jackpot;
        self.entry_price = entry_price;
        self.current_size = 0;
        self.participants = Vec::new();
        self.boosted_entrants = 0;
        self.released_entrants = 0;
        self.entropy = draw::mix(&[0u8; 32], &Pubkey::default(), round_id);
        self.randomness_account = Pubkey::default();
        self.bump = bump;
    }

    pub fn tickets_of(&self, player: &Pubkey) -> u64 {
        self.participants
            .iter()
            .find(|p| p.player == *player)
            .map_or(0, |p| p.tickets)
    }

    pub fn has_entered(&self, player: &Pubkey) -> bool {
        self.participants.iter().any(|p| p.player == *player)
    }

    /// Everything an entry must satisfy before anything is mutated.
    pub fn check_entry(&self, player: &Pubkey, paid_amount: u64) -> Result<()> {
        require!(
            self.state == RoundState::Active,
            LotteryError::GameNotActive
        );
        require!(!self.has_entered(player), LotteryError::InvalidEntry);
        require!(
            paid_amount == self.entry_price,
            LotteryError::IncorrectPayment
        );
        require!(
            self.participants.len() < MAX_PARTICIPANTS,
            LotteryError::GameFull
        );
        Ok(())
    }

    /// Records a checked entry. Returns `true` when the entry finishes the round.
    pub fn record_entry(
        &mut self,
        player: Pubkey,
        tickets: u64,
        seed: u64,
        boosted: bool,
    ) -> Result<bool> {
        self.current_size = self
            .current_size
            .checked_add(self.entry_price)
            .ok_or(LotteryError::MathOverflow)?;
        self.participants.push(Participant { player, tickets });
        if boosted {
            self.boosted_entrants += 1;
        }
        self.entropy = draw::mix(&self.entropy, &player, seed);

        if self.current_size >= self.target_jackpot {
            self.state = RoundState::Finished;
            return Ok(true);
        }
        Ok(false)
    }

    /// Only a finished round can take randomness or pay out.
    pub fn check_rewardable(&self) -> Result<()> {
        require!(
            self.state == RoundState::Finished,
            LotteryError::GameNotFinished
        );
        Ok(())
    }

    /// The randomness account can be bound once per round.
    pub fn check_uncommitted(&self) -> Result<()> {
        require_keys_eq!(
            self.randomness_account,
            Pubkey::default(),
            LotteryError::RandomnessAlreadyCommitted
        );
        Ok(())
    }

    pub fn all_cards_released(&self) -> bool {
        self.released_entrants >= self.boosted_entrants
    }
}

impl Ticket {
    pub fn has_locked_cards(&self) -> bool {
        !self.locked_cards.is_empty()
    }

    /// Marks the locked cards as handed back. Fails if there is nothing to
    /// hand back.
    pub fn release(&mut self) -> Result<Vec<CardAmount>> {
        require!(
            self.has_locked_cards() && !self.released,
            LotteryError::LockedEntryMismatch
        );
        self.released = true;
        Ok(self.locked_cards.clone())
    }
}

/// One participant's entry in one round.
#[account]
#[derive(InitSpace)]
pub struct Ticket {
    pub round_id: u64,
    pub player: Pubkey,
    pub tickets: u64,

    /// Cards locked for this entry, one item per card type.
    #[max_len(MAX_LOCKED_ENTRIES)]
    pub locked_cards: Vec<CardAmount>,

    /// Set once the locked cards are handed back.
    pub released: bool,

    pub bump: u8,
}

/// Cross-round reserve fed by round taxes and paid out in full to one
/// participant drawn from everyone who entered since the last payout.
///
/// The investors of an epoch live in `InvestorPage` accounts, page
/// `index / INVESTORS_PER_PAGE` holding investor `index`.
#[account]
#[derive(InitSpace)]
pub struct MegaJackpot {
    pub amount: u64,

    /// Bumped on every payout; registry accounts are keyed by it.
    pub epoch: u64,

    /// Distinct addresses that entered a round during this epoch.
    pub investor_count: u64,

    /// Hash chain over every entry seed since the last refresh.
    pub entropy: [u8; 32],

    pub randomness_account: Pubkey,

    pub bump: u8,
}

impl MegaJackpot {
    /// Page that receives the next investor.
    pub fn open_page(&self) -> u64 {
        self.investor_count / INVESTORS_PER_PAGE as u64
    }

    pub fn mix(&mut self, investor: &Pubkey, seed: u64) {
        self.entropy = draw::mix(&self.entropy, investor, seed);
    }

    /// Appends a new investor to the open page. Returns the investor's index.
    pub fn register(&mut self, page: &mut InvestorPage, investor: Pubkey) -> Result<u64> {
        require!(
            page.epoch == self.epoch
                && page.page == self.open_page()
                && page.investors.len() < INVESTORS_PER_PAGE,
            LotteryError::InvestorPageMismatch
        );
        let index = self.investor_count;
        page.investors.push(investor);
        self.investor_count = index.checked_add(1).ok_or(LotteryError::MathOverflow)?;
        Ok(index)
    }

    /// Page and slot of the investor drawn by `randomness`.
    pub fn winner_slot(&self, randomness: &[u8; 32]) -> Result<(u64, usize)> {
        let count = usize::try_from(self.investor_count)
            .map_err(|_| error!(LotteryError::MathOverflow))?;
        let index = draw::pick_index(count, randomness).ok_or(LotteryError::NoInvestors)?;
        Ok((
            (index / INVESTORS_PER_PAGE) as u64,
            index % INVESTORS_PER_PAGE,
        ))
    }

    pub fn contribute(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;
        Ok(())
    }

    /// Empties the pool and starts a new registry epoch after a payout.
    pub fn clear(&mut self) {
        self.amount = 0;
        self.epoch += 1;
        self.investor_count = 0;
        self.randomness_account = Pubkey::default();
    }

    pub fn check_uncommitted(&self) -> Result<()> {
        require_keys_eq!(
            self.randomness_account,
            Pubkey::default(),
            LotteryError::RandomnessAlreadyCommitted
        );
        Ok(())
    }
}

/// Marks `player` as registered for the mega jackpot during `epoch`.
#[account]
#[derive(InitSpace)]
pub struct InvestorRecord {
    pub epoch: u64,
    pub player: Pubkey,
    /// Position in the epoch's registry.
    pub index: u64,
    pub bump: u8,
}

/// One page of the mega jackpot registry.
#[account]
#[derive(InitSpace)]
pub struct InvestorPage {
    pub epoch: u64,
    pub page: u64,
    #[max_len(INVESTORS_PER_PAGE)]
    pub investors: Vec<Pubkey>,
    pub bump: u8,
}

/// Lamport escrow for entry fees, retained tax and the mega jackpot.
#[account]
#[derive(InitSpace)]
pub struct Vault {
    pub bump: u8,
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub const ENTRY: u64 = DEFAULT_ENTRY_PRICE;

    pub fn settings() -> LotterySettings {
        let mut settings = LotterySettings {
            authority: Pubkey::default(),
            tax_percent: 0,
            main_reward_percent: 0,
            random_ten_reward_percent: 0,
            mega_jackpot_fee_percent: 0,
            team_share_percent: 0,
            entry_price: 0,
            min_jackpot_size: 0,
            max_jackpot_size: 0,
            max_mega_jackpot: 0,
            bump: 0,
        };
        settings.reset(Pubkey::new_unique(), 255);
        settings
    }

    pub fn round(target_jackpot: u64) -> Round {
        let mut round = Round {
            round_id: 0,
            state: RoundState::Rewarded,
            target_jackpot: 0,
            entry_price: 0,
            current_size: 0,
            participants: Vec::new(),
            boosted_entrants: 0,
            released_entrants: 0,
            entropy: [0; 32],
            randomness_account: Pubkey::default(),
            bump: 0,
        };
        round.start(1, target_jackpot, ENTRY, 255);
        round
    }

    pub fn mega_jackpot() -> MegaJackpot {
        MegaJackpot {
            amount: 0,
            epoch: 0,
            investor_count: 0,
            entropy: [0; 32],
            randomness_account: Pubkey::default(),
            bump: 255,
        }
    }

    pub fn investor_page(epoch: u64, page: u64) -> InvestorPage {
        InvestorPage {
            epoch,
            page,
            investors: Vec::new(),
            bump: 255,
        }
    }

    /// Registers `players` the way consecutive entries do, opening pages as
    /// they fill up.
    pub fn register_all(mega: &mut MegaJackpot, players: &[Pubkey]) -> Vec<InvestorPage> {
        let mut pages: Vec<InvestorPage> = Vec::new();
        for player in players {
            if pages.last().map_or(true, |p| p.page != mega.open_page()) {
                pages.push(investor_page(mega.epoch, mega.open_page()));
            }
            if let Some(page) = pages.last_mut() {
                mega.register(page, *player).unwrap();
            }
        }
        pages
    }

    fn enter(round: &mut Round, player: Pubkey, tickets: u64) -> Result<bool> {
        round.check_entry(&player, ENTRY)?;
        round.record_entry(player, tickets, 7, false)
    }

    fn assert_size_invariant(round: &Round) {
        assert_eq!(
            round.current_size,
            round.entry_price * round.participants.len() as u64
        );
    }

    #[test]
    fn test_default_settings() {
        let settings = settings();
        assert_eq!(settings.tax_percent, 1_000);
        assert_eq!(settings.main_reward_percent, 8_000);
        assert_eq!(settings.random_ten_reward_percent, 1_000);
        assert_eq!(settings.mega_jackpot_fee_percent, 5_000);
        assert_eq!(settings.team_share_percent, 5_000);
        assert_eq!(settings.entry_price, LAMPORTS_PER_SOL / 20);
        assert_eq!(
            settings.jackpot_size_limits(),
            JackpotSizeLimits {
                min: LAMPORTS_PER_SOL,
                max: 10 * LAMPORTS_PER_SOL,
            }
        );
        assert_eq!(settings.max_mega_jackpot, 100 * LAMPORTS_PER_SOL);
    }

    #[test]
    fn test_set_reward_distribution() {
        let mut settings = settings();
        settings.set_reward_distribution(1_500, 7_500, 1_000).unwrap();
        assert_eq!(settings.tax_percent, 1_500);
        assert_eq!(settings.main_reward_percent, 7_500);
        assert_eq!(settings.random_ten_reward_percent, 1_000);
    }

    #[test]
    fn test_reward_distribution_bounds() {
        let mut settings = settings();
        assert_eq!(
            settings
                .set_reward_distribution(SCALE + 1, 8_000, 1_000)
                .unwrap_err(),
            LotteryError::TaxPercentTooHigh.into()
        );
        assert_eq!(
            settings
                .set_reward_distribution(1_000, SCALE + 1, 1_000)
                .unwrap_err(),
            LotteryError::MainRewardPercentTooHigh.into()
        );
        assert_eq!(
            settings
                .set_reward_distribution(1_000, 8_000, SCALE + 1)
                .unwrap_err(),
            LotteryError::RandomTenRewardPercentTooHigh.into()
        );
        assert_eq!(
            settings
                .set_reward_distribution(1_500, 8_000, 1_000)
                .unwrap_err(),
            LotteryError::RewardDistributionTooHigh.into()
        );
        // Rejected updates leave the stored split untouched.
        assert!(
            settings.tax_percent + settings.main_reward_percent + settings.random_ten_reward_percent
                <= SCALE
        );
        assert_eq!(settings.tax_percent, DEFAULT_TAX_PERCENT);
    }

    #[test]
    fn test_single_percent_setters() {
        let mut settings = settings();
        settings.set_mega_jackpot_fee(6_000).unwrap();
        settings.set_team_share_percent(4_000).unwrap();
        assert_eq!(settings.mega_jackpot_fee_percent, 6_000);
        assert_eq!(settings.team_share_percent, 4_000);

        assert_eq!(
            settings.set_mega_jackpot_fee(SCALE + 1).unwrap_err(),
            LotteryError::MegaJackpotFeeTooHigh.into()
        );
        assert_eq!(
            settings.set_team_share_percent(SCALE + 1).unwrap_err(),
            LotteryError::TeamSharePercentTooHigh.into()
        );
    }

    #[test]
    fn test_price_and_bound_setters() {
        let mut settings = settings();
        assert_eq!(
            settings.set_entry_price(0).unwrap_err(),
            LotteryError::InvalidEntryPrice.into()
        );
        settings.set_entry_price(LAMPORTS_PER_SOL / 10).unwrap();
        assert_eq!(settings.entry_price, LAMPORTS_PER_SOL / 10);

        assert_eq!(
            settings
                .set_jackpot_size_limits(0, 20 * LAMPORTS_PER_SOL)
                .unwrap_err(),
            LotteryError::InvalidMinJackpotSize.into()
        );
        assert_eq!(
            settings
                .set_jackpot_size_limits(20 * LAMPORTS_PER_SOL, 2 * LAMPORTS_PER_SOL)
                .unwrap_err(),
            LotteryError::InvalidMaxJackpotSize.into()
        );
        settings
            .set_jackpot_size_limits(2 * LAMPORTS_PER_SOL, 20 * LAMPORTS_PER_SOL)
            .unwrap();
        assert_eq!(
            settings.jackpot_size_limits(),
            JackpotSizeLimits {
                min: 2 * LAMPORTS_PER_SOL,
                max: 20 * LAMPORTS_PER_SOL,
            }
        );

        assert_eq!(
            settings.set_max_mega_jackpot(0).unwrap_err(),
            LotteryError::InvalidMaxMegaJackpot.into()
        );
        settings.set_max_mega_jackpot(200 * LAMPORTS_PER_SOL).unwrap();
        assert_eq!(settings.max_mega_jackpot, 200 * LAMPORTS_PER_SOL);
    }

    #[test]
    fn test_target_jackpot_must_be_in_range() {
        let settings = settings();
        settings.check_target_jackpot(LAMPORTS_PER_SOL).unwrap();
        settings.check_target_jackpot(10 * LAMPORTS_PER_SOL).unwrap();
        assert_eq!(
            settings
                .check_target_jackpot(LAMPORTS_PER_SOL - 1)
                .unwrap_err(),
            LotteryError::JackpotSizeOutOfRange.into()
        );
        assert!(settings
            .check_target_jackpot(10 * LAMPORTS_PER_SOL + 1)
            .is_err());
    }

    #[test]
    fn test_round_finishes_at_target() {
        let mut round = round(LAMPORTS_PER_SOL);
        for i in 0..20 {
            assert_eq!(round.state, RoundState::Active);
            let finished = enter(&mut round, Pubkey::new_unique(), 1).unwrap();
            assert_eq!(finished, i == 19);
            assert_size_invariant(&round);
        }
        assert_eq!(round.state, RoundState::Finished);
        assert_eq!(round.current_size, LAMPORTS_PER_SOL);
    }

    #[test]
    fn test_second_entry_is_rejected() {
        let mut round = round(LAMPORTS_PER_SOL);
        let player = Pubkey::new_unique();
        enter(&mut round, player, 60).unwrap();

        assert_eq!(
            round.check_entry(&player, ENTRY).unwrap_err(),
            LotteryError::InvalidEntry.into()
        );
        assert_eq!(round.tickets_of(&player), 60);
        assert_eq!(round.current_size, ENTRY);
        assert_eq!(round.participants.len(), 1);
    }

    #[test]
    fn test_entry_requires_exact_price() {
        let round = round(LAMPORTS_PER_SOL);
        let player = Pubkey::new_unique();
        assert_eq!(
            round.check_entry(&player, ENTRY - 1).unwrap_err(),
            LotteryError::IncorrectPayment.into()
        );
        assert!(round.check_entry(&player, ENTRY + 1).is_err());
    }

    #[test]
    fn test_entry_requires_active_round() {
        let mut round = round(ENTRY);
        enter(&mut round, Pubkey::new_unique(), 1).unwrap();
        assert_eq!(round.state, RoundState::Finished);

        assert_eq!(
            round
                .check_entry(&Pubkey::new_unique(), ENTRY)
                .unwrap_err(),
            LotteryError::GameNotActive.into()
        );
    }

    #[test]
    fn test_entropy_depends_on_seeds() {
        let player = Pubkey::new_unique();
        let mut a = round(LAMPORTS_PER_SOL);
        let mut b = round(LAMPORTS_PER_SOL);
        a.record_entry(player, 1, 1, false).unwrap();
        b.record_entry(player, 1, 2, false).unwrap();
        assert_ne!(a.entropy, b.entropy);
    }

    #[test]
    fn test_active_round_bookkeeping() {
        let mut game_state = GameState {
            authority: Pubkey::new_unique(),
            team_wallet: Pubkey::new_unique(),
            card_collection: Pubkey::new_unique(),
            last_round_id: 0,
            active_rounds: Vec::new(),
            committed_pool: 0,
            bump: 255,
            vault_bump: 255,
            authority_bump: 255,
        };
        assert_eq!(game_state.open_round().unwrap(), 1);
        assert_eq!(game_state.open_round().unwrap(), 2);
        assert_eq!(game_state.active_rounds, vec![1, 2]);

        game_state.deactivate_round(1);
        assert_eq!(game_state.active_rounds, vec![2]);
        assert_eq!(game_state.open_round().unwrap(), 3);

        while game_state.active_rounds.len() < MAX_ACTIVE_ROUNDS {
            game_state.open_round().unwrap();
        }
        assert_eq!(
            game_state.open_round().unwrap_err(),
            LotteryError::TooManyActiveGames.into()
        );
    }

    #[test]
    fn test_ticket_release_happens_once() {
        let mut ticket = Ticket {
            round_id: 1,
            player: Pubkey::new_unique(),
            tickets: 60,
            locked_cards: vec![CardAmount {
                card_type_id: 0,
                count: 1,
            }],
            released: false,
            bump: 255,
        };
        assert_eq!(ticket.release().unwrap().len(), 1);
        assert!(ticket.released);
        assert_eq!(
            ticket.release().unwrap_err(),
            LotteryError::LockedEntryMismatch.into()
        );

        ticket.locked_cards.clear();
        ticket.released = false;
        assert!(ticket.release().is_err());
    }

    #[test]
    fn test_target_must_fit_in_one_round() {
        let mut settings = settings();
        settings.check_target_jackpot(10 * LAMPORTS_PER_SOL).unwrap();

        settings.set_entry_price(LAMPORTS_PER_SOL / 100).unwrap();
        assert_eq!(
            settings
                .check_target_jackpot(10 * LAMPORTS_PER_SOL)
                .unwrap_err(),
            LotteryError::TargetExceedsCapacity.into()
        );
        settings.check_target_jackpot(2 * LAMPORTS_PER_SOL).unwrap();

        settings.set_entry_price(LAMPORTS_PER_SOL / 20).unwrap();
        settings
            .set_jackpot_size_limits(LAMPORTS_PER_SOL, 20 * LAMPORTS_PER_SOL)
            .unwrap();
        assert_eq!(
            settings
                .check_target_jackpot(10 * LAMPORTS_PER_SOL + 1)
                .unwrap_err(),
            LotteryError::TargetExceedsCapacity.into()
        );
    }

    #[test]
    fn test_accepted_target_can_finish() {
        let mut settings = settings();
        settings.set_entry_price(LAMPORTS_PER_SOL / 100).unwrap();
        let target = settings.entry_price * MAX_PARTICIPANTS as u64;
        settings.check_target_jackpot(target).unwrap();

        let mut round = round(target);
        round.start(2, target, settings.entry_price, 255);
        for _ in 0..MAX_PARTICIPANTS {
            let player = Pubkey::new_unique();
            round.check_entry(&player, settings.entry_price).unwrap();
            round.record_entry(player, 1, 0, false).unwrap();
        }
        assert_eq!(round.state, RoundState::Finished);
    }

    #[test]
    fn test_only_finished_round_is_rewardable() {
        let mut round = round(ENTRY * 2);
        assert_eq!(
            round.check_rewardable().unwrap_err(),
            LotteryError::GameNotFinished.into()
        );

        enter(&mut round, Pubkey::new_unique(), 1).unwrap();
        enter(&mut round, Pubkey::new_unique(), 1).unwrap();
        round.check_rewardable().unwrap();

        round.state = RoundState::Rewarded;
        assert_eq!(
            round.check_rewardable().unwrap_err(),
            LotteryError::GameNotFinished.into()
        );
        assert_eq!(round.current_size, ENTRY * 2);
        assert_eq!(round.participants.len(), 2);
    }

    #[test]
    fn test_randomness_commits_once() {
        let mut round = round(ENTRY);
        round.check_uncommitted().unwrap();
        round.randomness_account = Pubkey::new_unique();
        assert_eq!(
            round.check_uncommitted().unwrap_err(),
            LotteryError::RandomnessAlreadyCommitted.into()
        );

        let mut mega = mega_jackpot();
        mega.check_uncommitted().unwrap();
        mega.randomness_account = Pubkey::new_unique();
        assert!(mega.check_uncommitted().is_err());
        mega.clear();
        mega.check_uncommitted().unwrap();
    }

    #[test]
    fn test_registry_grows_past_one_page() {
        let mut mega = mega_jackpot();
        let players: Vec<Pubkey> = (0..300).map(|_| Pubkey::new_unique()).collect();
        let pages = register_all(&mut mega, &players);

        assert_eq!(mega.investor_count, 300);
        assert_eq!(pages.len(), 10);
        assert!(pages.iter().all(|p| p.investors.len() <= INVESTORS_PER_PAGE));
        assert_eq!(pages[9].investors.len(), 300 - 9 * INVESTORS_PER_PAGE);
        assert_eq!(pages[9].investors.last(), players.last());

        let (page, slot) = mega.winner_slot(&[9; 32]).unwrap();
        assert_eq!(
            pages[page as usize].investors[slot],
            players[page as usize * INVESTORS_PER_PAGE + slot]
        );
    }

    #[test]
    fn test_register_needs_the_open_page() {
        let mut mega = mega_jackpot();
        let players: Vec<Pubkey> = (0..INVESTORS_PER_PAGE).map(|_| Pubkey::new_unique()).collect();
        let mut pages = register_all(&mut mega, &players);

        assert_eq!(
            mega.register(&mut pages[0], Pubkey::new_unique()).unwrap_err(),
            LotteryError::InvestorPageMismatch.into()
        );
        let mut stale = investor_page(mega.epoch + 1, mega.open_page());
        assert!(mega.register(&mut stale, Pubkey::new_unique()).is_err());
        assert_eq!(mega.investor_count, INVESTORS_PER_PAGE as u64);
    }

    #[test]
    fn test_clear_starts_a_new_epoch() {
        let mut mega = mega_jackpot();
        register_all(&mut mega, &[Pubkey::new_unique()]);
        mega.contribute(ENTRY).unwrap();
        mega.clear();

        assert_eq!(mega.amount, 0);
        assert_eq!(mega.epoch, 1);
        assert_eq!(mega.investor_count, 0);
        assert_eq!(
            mega.winner_slot(&[1; 32]).unwrap_err(),
            LotteryError::NoInvestors.into()
        );
    }
}
