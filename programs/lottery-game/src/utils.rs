use anchor_lang::prelude::*;
use lottery_card::cpi::accounts::AdjustLocks;
use lottery_card::state::CardAmount;
use switchboard_on_demand::accounts::RandomnessAccountData;
use switchboard_on_demand::{ON_DEMAND_DEVNET_PID, ON_DEMAND_MAINNET_PID};

use crate::constants::GAME_AUTHORITY_SEED;
use crate::error::LotteryError;

/// Transfer lamports from the vault PDA (program-owned) to a recipient.
pub fn transfer_from_vault<'info>(
    vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    **vault.try_borrow_mut_lamports()? -= amount;
    **to.try_borrow_mut_lamports()? += amount;
    Ok(())
}

/// Lamports the vault can pay out while staying rent exempt.
pub fn vault_spendable(vault: &AccountInfo) -> Result<u64> {
    let rent_floor = Rent::get()?.minimum_balance(vault.data_len());
    Ok(vault.lamports().saturating_sub(rent_floor))
}

pub fn is_switchboard_owned(owner: &Pubkey) -> bool {
    *owner == ON_DEMAND_MAINNET_PID || *owner == ON_DEMAND_DEVNET_PID
}

/// Accepts a Switchboard randomness account only if it was seeded in the
/// previous slot, i.e. its value cannot be known yet.
pub fn check_unrevealed(randomness_account: &AccountInfo, clock: &Clock) -> Result<()> {
    require!(
        is_switchboard_owned(randomness_account.owner),
        LotteryError::RandomnessAccountNotOwned
    );
    let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| LotteryError::InvalidRandomnessData)?;

    if randomness_data.seed_slot != clock.slot.saturating_sub(1) {
        msg!("Seed slot: {}", randomness_data.seed_slot);
        return Err(LotteryError::RandomnessAlreadyRevealed.into());
    }
    Ok(())
}

/// Revealed value of a committed Switchboard randomness account.
pub fn revealed_value(randomness_account: &AccountInfo, clock: &Clock) -> Result<[u8; 32]> {
    let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| LotteryError::InvalidRandomnessData)?;

    randomness_data
        .get_value(clock)
        .map_err(|_| LotteryError::RandomnessNotResolved.into())
}

/// Hands `cards` back to `owner` through the card program, signed by the
/// game authority PDA.
pub fn unlock_cards<'info>(
    card_program: AccountInfo<'info>,
    card_collection: AccountInfo<'info>,
    game_authority: AccountInfo<'info>,
    card_wallet: AccountInfo<'info>,
    authority_bump: u8,
    owner: Pubkey,
    cards: &[CardAmount],
) -> Result<()> {
    let signer_seeds: &[&[&[u8]]] = &[&[GAME_AUTHORITY_SEED, &[authority_bump]]];
    lottery_card::cpi::batch_unlock_cards(
        CpiContext::new_with_signer(
            card_program,
            AdjustLocks {
                card_collection,
                game_authority,
                card_wallet,
            },
            signer_seeds,
        ),
        owner,
        cards.iter().map(|c| c.card_type_id).collect(),
        cards.iter().map(|c| c.count).collect(),
    )
}

#[cfg(test)]
pub mod tests {
    use super::*;

    const LAMPORTS: u64 = 1_000_000;

    /// Owned account data for lamport tests.
    pub struct TestAccount {
        pub key: Pubkey,
        pub owner: Pubkey,
        pub lamports: u64,
        pub data: Vec<u8>,
    }

    impl TestAccount {
        pub fn new(owner: Pubkey, lamports: u64) -> Self {
            Self {
                key: Pubkey::new_unique(),
                owner,
                lamports,
                data: Vec::new(),
            }
        }

        pub fn info(&mut self) -> AccountInfo<'_> {
            AccountInfo::new(
                &self.key,
                false,
                true,
                &mut self.lamports,
                &mut self.data,
                &self.owner,
                false,
                0,
            )
        }
    }

    #[test]
    fn test_transfer_from_vault_moves_exact_amount() {
        let mut vault = TestAccount::new(crate::ID, 3 * LAMPORTS);
        let mut to = TestAccount::new(Pubkey::default(), LAMPORTS);
        {
            let vault_info = vault.info();
            let to_info = to.info();
            transfer_from_vault(&vault_info, &to_info, LAMPORTS).unwrap();
            transfer_from_vault(&vault_info, &to_info, 0).unwrap();
        }
        assert_eq!(vault.lamports, 2 * LAMPORTS);
        assert_eq!(to.lamports, 2 * LAMPORTS);
    }

    #[test]
    fn test_randomness_owner_must_be_switchboard() {
        assert!(is_switchboard_owned(&ON_DEMAND_MAINNET_PID));
        assert!(is_switchboard_owned(&ON_DEMAND_DEVNET_PID));
        assert!(!is_switchboard_owned(&crate::ID));

        let mut forged = TestAccount::new(Pubkey::new_unique(), LAMPORTS);
        let clock = Clock::default();
        assert_eq!(
            check_unrevealed(&forged.info(), &clock).unwrap_err(),
            LotteryError::RandomnessAccountNotOwned.into()
        );
    }
}
