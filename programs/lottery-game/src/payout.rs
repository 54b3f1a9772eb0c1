use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::LotteryError;
use crate::state::LotterySettings;

/// How a finished round's pool is divided. Every field is in lamports.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RewardSplit {
    pub tax: u64,
    /// Part of the tax added to the mega jackpot, capped by `max_mega_jackpot`.
    pub mega_contribution: u64,
    /// Part of the tax remainder paid to the team wallet.
    pub team_share: u64,
    /// Tax remainder left in the vault.
    pub retained: u64,
    pub main_reward: u64,
    pub random_ten_winners: usize,
    pub random_ten_each: u64,
}

impl RewardSplit {
    /// Lamports that leave the vault during the reward.
    pub fn paid_out(&self) -> Result<u64> {
        let random_ten_total = self
            .random_ten_each
            .checked_mul(self.random_ten_winners as u64)
            .ok_or(LotteryError::MathOverflow)?;
        self.main_reward
            .checked_add(random_ten_total)
            .and_then(|x| x.checked_add(self.team_share))
            .ok_or_else(|| error!(LotteryError::MathOverflow))
    }
}

fn share(amount: u64, numerator: u64, denominator: u128) -> Result<u64> {
    let value = (amount as u128)
        .checked_mul(numerator as u128)
        .ok_or(LotteryError::MathOverflow)?
        / denominator;
    u64::try_from(value).map_err(|_| error!(LotteryError::MathOverflow))
}

/// Splits `pool` according to `settings`.
///
/// * `mega_jackpot` - amount already in the mega jackpot, used to apply the cap
/// * `participants` - number of distinct participants in the round
pub fn split_pool(
    pool: u64,
    settings: &LotterySettings,
    mega_jackpot: u64,
    participants: usize,
) -> Result<RewardSplit> {
    let scale = SCALE as u128;

    let tax = share(pool, settings.tax_percent, scale)?;
    // pool * tax * fee / scale^2, without rounding the tax first
    let uncapped = u64::try_from(
        pool as u128 * settings.tax_percent as u128 * settings.mega_jackpot_fee_percent as u128
            / (scale * scale),
    )
    .map_err(|_| error!(LotteryError::MathOverflow))?;
    let headroom = settings.max_mega_jackpot.saturating_sub(mega_jackpot);
    let mega_contribution = uncapped.min(headroom).min(tax);

    let remainder = tax - mega_contribution;
    let team_share = share(remainder, settings.team_share_percent, scale)?;

    let main_reward = share(pool, settings.main_reward_percent, scale)?;

    let random_ten_winners = participants.min(RANDOM_TEN_WINNERS);
    let random_ten_each = if random_ten_winners == 0 {
        0
    } else {
        share(pool, settings.random_ten_reward_percent, scale)? / random_ten_winners as u64
    };

    Ok(RewardSplit {
        tax,
        mega_contribution,
        team_share,
        retained: remainder - team_share,
        main_reward,
        random_ten_winners,
        random_ten_each,
    })
}

/// Vault lamports the owner may withdraw: whatever `spendable` holds beyond
/// the fees of unrewarded rounds and the mega jackpot.
pub fn withdrawable(spendable: u64, committed_pool: u64, mega_jackpot: u64) -> Result<u64> {
    let encumbered = committed_pool
        .checked_add(mega_jackpot)
        .ok_or(LotteryError::MathOverflow)?;
    let amount = spendable.saturating_sub(encumbered);
    require!(amount > 0, LotteryError::NothingToWithdraw);
    Ok(amount)
}
