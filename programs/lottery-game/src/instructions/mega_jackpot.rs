use anchor_lang::prelude::*;

use crate::constants::*;
use crate::draw;
use crate::error::LotteryError;
use crate::events::MegaJackpotRefreshed;
use crate::state::*;
use crate::utils::{revealed_value, transfer_from_vault, vault_spendable};

/// Accounts required to pay out the mega jackpot. Owner only.
#[derive(Accounts)]
pub struct RefreshMegaJackpot<'info> {
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

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = game_state.vault_bump,
    )]
    pub vault: Account<'info, Vault>,

    /// Registry page holding the drawn investor. Not needed while the
    /// jackpot is empty.
    pub investor_page: Option<Account<'info, InvestorPage>>,

    /// CHECK: Receives the jackpot; must be the drawn investor.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    /// The randomness oracle account committed for this draw.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Investor stored at the drawn position. `page` must be the current
/// epoch's page holding it.
pub fn draw_investor(
    mega_jackpot: &MegaJackpot,
    page: &InvestorPage,
    randomness: &[u8; 32],
) -> Result<Pubkey> {
    let (page_index, slot) = mega_jackpot.winner_slot(randomness)?;
    require!(
        page.epoch == mega_jackpot.epoch && page.page == page_index,
        LotteryError::InvestorPageMismatch
    );
    page.investors
        .get(slot)
        .copied()
        .ok_or_else(|| error!(LotteryError::InvestorPageMismatch))
}

/// Moves the whole jackpot from `vault` to `winner`, who must be the drawn
/// investor, and starts a new epoch. Returns the winner and the amount paid.
pub fn pay_mega_jackpot<'info>(
    mega_jackpot: &mut MegaJackpot,
    page: &InvestorPage,
    randomness: &[u8; 32],
    vault: &AccountInfo<'info>,
    winner: &AccountInfo<'info>,
) -> Result<(Pubkey, u64)> {
    let drawn = draw_investor(mega_jackpot, page, randomness)?;
    require_keys_eq!(winner.key(), drawn, LotteryError::WinnerAccountMismatch);

    let amount = mega_jackpot.amount;
    transfer_from_vault(vault, winner, amount)?;
    mega_jackpot.clear();
    Ok((drawn, amount))
}

/// Pays the whole mega jackpot to one investor and starts a new registry.
/// Nothing happens while the jackpot is empty.
pub fn process_refresh_mega_jackpot(ctx: Context<RefreshMegaJackpot>) -> Result<()> {
    let mega_jackpot = &mut ctx.accounts.mega_jackpot;
    if mega_jackpot.amount == 0 {
        msg!("Mega jackpot is empty");
        return Ok(());
    }

    let clock = Clock::get()?;
    require_keys_eq!(
        ctx.accounts.randomness_account_data.key(),
        mega_jackpot.randomness_account,
        LotteryError::IncorrectRandomnessAccount
    );
    let revealed = revealed_value(&ctx.accounts.randomness_account_data, &clock)?;
    let randomness = draw::randomness(&mega_jackpot.entropy, &revealed);

    let page = ctx
        .accounts
        .investor_page
        .as_ref()
        .ok_or(LotteryError::InvestorPageMismatch)?;
    let vault = ctx.accounts.vault.to_account_info();
    require!(
        vault_spendable(&vault)? >= mega_jackpot.amount,
        LotteryError::VaultShortfall
    );

    let investors = mega_jackpot.investor_count;
    let (winner, amount) = pay_mega_jackpot(
        mega_jackpot,
        page,
        &randomness,
        &vault,
        &ctx.accounts.winner.to_account_info(),
    )?;

    msg!("Mega jackpot of {} paid to {}", amount, winner);
    emit!(MegaJackpotRefreshed {
        winner,
        amount,
        investors,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::{mega_jackpot, register_all};
    use crate::utils::tests::TestAccount;

    const VAULT_FLOOR: u64 = 1_000_000;

    #[test]
    fn test_refresh_pays_one_investor_and_clears() {
        let mut mega = mega_jackpot();
        let mut players: Vec<TestAccount> = (0..40)
            .map(|_| TestAccount::new(Pubkey::default(), 0))
            .collect();
        let keys: Vec<Pubkey> = players.iter().map(|p| p.key).collect();
        for (seed, key) in keys.iter().enumerate() {
            mega.mix(key, seed as u64);
        }
        let pages = register_all(&mut mega, &keys);
        mega.contribute(LAMPORTS_PER_SOL / 20).unwrap();
        mega.randomness_account = Pubkey::new_unique();

        let randomness = draw::randomness(&mega.entropy, &[7; 32]);
        let (page, slot) = mega.winner_slot(&randomness).unwrap();
        let index = page as usize * INVESTORS_PER_PAGE + slot;

        let mut vault = TestAccount::new(crate::ID, VAULT_FLOOR + LAMPORTS_PER_SOL / 20);
        let (winner, amount) = {
            let vault_info = vault.info();
            let winner_info = players[index].info();
            pay_mega_jackpot(
                &mut mega,
                &pages[page as usize],
                &randomness,
                &vault_info,
                &winner_info,
            )
            .unwrap()
        };

        assert_eq!(winner, keys[index]);
        assert_eq!(amount, LAMPORTS_PER_SOL / 20);
        assert_eq!(vault.lamports, VAULT_FLOOR);
        let paid: Vec<u64> = players.iter().map(|p| p.lamports).collect();
        assert_eq!(paid.iter().filter(|&&l| l == LAMPORTS_PER_SOL / 20).count(), 1);
        assert_eq!(paid.iter().sum::<u64>(), LAMPORTS_PER_SOL / 20);

        assert_eq!(mega.amount, 0);
        assert_eq!(mega.investor_count, 0);
        assert_eq!(mega.epoch, 1);
        assert_eq!(mega.randomness_account, Pubkey::default());
    }

    #[test]
    fn test_wrong_winner_or_page_pays_nothing() {
        let mut mega = mega_jackpot();
        let keys: Vec<Pubkey> = (0..40).map(|_| Pubkey::new_unique()).collect();
        let pages = register_all(&mut mega, &keys);
        mega.contribute(LAMPORTS_PER_SOL / 20).unwrap();

        let randomness = [3; 32];
        let (page, _) = mega.winner_slot(&randomness).unwrap();
        let other_page = &pages[1 - page as usize];
        let mut vault = TestAccount::new(crate::ID, VAULT_FLOOR + LAMPORTS_PER_SOL / 20);
        let mut stranger = TestAccount::new(Pubkey::default(), 0);
        {
            let vault_info = vault.info();
            let stranger_info = stranger.info();
            assert_eq!(
                pay_mega_jackpot(&mut mega, other_page, &randomness, &vault_info, &stranger_info)
                    .unwrap_err(),
                LotteryError::InvestorPageMismatch.into()
            );
            assert_eq!(
                pay_mega_jackpot(
                    &mut mega,
                    &pages[page as usize],
                    &randomness,
                    &vault_info,
                    &stranger_info
                )
                .unwrap_err(),
                LotteryError::WinnerAccountMismatch.into()
            );
        }
        assert_eq!(stranger.lamports, 0);
        assert_eq!(mega.amount, LAMPORTS_PER_SOL / 20);
        assert_eq!(mega.investor_count, 40);
    }

    #[test]
    fn test_empty_registry_has_no_winner() {
        let mega = mega_jackpot();
        let page = crate::state::tests::investor_page(0, 0);
        assert_eq!(
            draw_investor(&mega, &page, &[1; 32]).unwrap_err(),
            LotteryError::NoInvestors.into()
        );
    }
}
