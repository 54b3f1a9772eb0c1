use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::CardError;

/// Rarity tier of a card type. Each tier carries a fixed ticket weight.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum CardTier {
    Diamond,
    Platinum,
    Gold,
    Silver,
    Bronze,
}

impl CardTier {
    pub fn boost(self) -> u64 {
        match self {
            CardTier::Diamond => 60,
            CardTier::Platinum => 40,
            CardTier::Gold => 25,
            CardTier::Silver => 15,
            CardTier::Bronze => 10,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct CardType {
    pub tier: CardTier,
    /// Price of a single card in lamports.
    pub price: u64,
    pub supply_cap: u64,
    /// Only ever increases.
    pub minted: u64,
}

/// One `(card type, count)` pair of a batch operation.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub struct CardAmount {
    pub card_type_id: u8,
    pub count: u64,
}

/// Zips the parallel id/count arguments of a batch call into pairs.
pub fn pair_entries(card_type_ids: &[u8], counts: &[u64]) -> Result<Vec<CardAmount>> {
    require_eq!(card_type_ids.len(), counts.len(), CardError::LengthMismatch);
    Ok(card_type_ids
        .iter()
        .zip(counts)
        .map(|(&card_type_id, &count)| CardAmount {
            card_type_id,
            count,
        })
        .collect())
}

/// Sums requested counts per card type so a repeated id is checked against the
/// balance once, with its full total.
pub fn totals(entries: &[CardAmount]) -> Result<[u64; MAX_CARD_TYPES]> {
    let mut totals = [0u64; MAX_CARD_TYPES];
    for entry in entries {
        let slot = totals
            .get_mut(entry.card_type_id as usize)
            .ok_or(CardError::InvalidCardType)?;
        *slot = slot
            .checked_add(entry.count)
            .ok_or(CardError::MathOverflow)?;
    }
    Ok(totals)
}

/// Collection-wide configuration: card types, pricing, metadata and the
/// address allowed to lock and unlock cards.
#[account]
#[derive(InitSpace)]
pub struct CardCollection {
    /// Owner allowed to add card types, change prices and airdrop.
    pub authority: Pubkey,

    /// Signer allowed to lock and unlock cards (the game's authority PDA).
    /// `Pubkey::default()` until `set_lottery_game` is called.
    pub lottery_game: Pubkey,

    #[max_len(MAX_BASE_URI_LEN)]
    pub base_uri: String,

    /// Card type id is the index into this list.
    #[max_len(MAX_CARD_TYPES)]
    pub card_types: Vec<CardType>,

    pub bump: u8,
}

impl CardCollection {
    pub fn card_type(&self, card_type_id: u8) -> Result<&CardType> {
        self.card_types
            .get(card_type_id as usize)
            .ok_or_else(|| error!(CardError::InvalidCardType))
    }

    pub fn add_card_type(&mut self, tier: CardTier, price: u64, supply_cap: u64) -> Result<u8> {
        require!(
            self.card_types.len() < MAX_CARD_TYPES,
            CardError::TooManyCardTypes
        );
        require!(supply_cap > 0, CardError::InvalidSupplyCap);

        self.card_types.push(CardType {
            tier,
            price,
            supply_cap,
            minted: 0,
        });
        Ok((self.card_types.len() - 1) as u8)
    }

    pub fn set_token_price(&mut self, card_type_id: u8, price: u64) -> Result<()> {
        self.card_types
            .get_mut(card_type_id as usize)
            .ok_or(CardError::InvalidCardType)?
            .price = price;
        Ok(())
    }

    pub fn set_base_uri(&mut self, base_uri: String) -> Result<()> {
        require!(
            base_uri.len() <= MAX_BASE_URI_LEN,
            CardError::BaseUriTooLong
        );
        self.base_uri = base_uri;
        Ok(())
    }

    /// Price of `amount` cards of one type.
    pub fn mint_cost(&self, card_type_id: u8, amount: u64) -> Result<u64> {
        self.card_type(card_type_id)?
            .price
            .checked_mul(amount)
            .ok_or_else(|| error!(CardError::MathOverflow))
    }

    /// Counts `amount` new cards against the supply cap.
    pub fn record_mint(&mut self, card_type_id: u8, amount: u64) -> Result<()> {
        let card_type = self
            .card_types
            .get_mut(card_type_id as usize)
            .ok_or(CardError::InvalidCardType)?;
        let minted = card_type
            .minted
            .checked_add(amount)
            .ok_or(CardError::MathOverflow)?;
        require!(minted <= card_type.supply_cap, CardError::ExceedsSupply);
        card_type.minted = minted;
        Ok(())
    }

    pub fn uri(&self, card_type_id: u8) -> String {
        format!("{}{}.json", self.base_uri, card_type_id)
    }

    /// Ticket weight the requested cards would add. Every requested card must
    /// be held and unlocked.
    pub fn boost(&self, wallet: &CardWallet, entries: &[CardAmount]) -> Result<u64> {
        wallet.ensure_unlocked(entries, CardError::NotEnoughUnlockedCards)?;

        entries.iter().try_fold(0u64, |acc, entry| -> Result<u64> {
            let weight = self
                .card_type(entry.card_type_id)?
                .tier
                .boost()
                .checked_mul(entry.count)
                .ok_or(CardError::MathOverflow)?;
            acc.checked_add(weight)
                .ok_or_else(|| error!(CardError::MathOverflow))
        })
    }
}

/// Every card balance of one owner. `locked[i] <= balances[i]` always holds.
#[account]
#[derive(InitSpace)]
pub struct CardWallet {
    pub owner: Pubkey,
    pub balances: [u64; MAX_CARD_TYPES],
    pub locked: [u64; MAX_CARD_TYPES],
    pub bump: u8,
}

impl CardWallet {
    pub fn unlocked(&self, card_type_id: u8) -> u64 {
        let i = card_type_id as usize;
        if i >= MAX_CARD_TYPES {
            return 0;
        }
        self.balances[i].saturating_sub(self.locked[i])
    }

    fn ensure_unlocked(
        &self,
        entries: &[CardAmount],
        shortfall: CardError,
    ) -> Result<[u64; MAX_CARD_TYPES]> {
        let wanted = totals(entries)?;
        for (i, &count) in wanted.iter().enumerate() {
            if count > self.unlocked(i as u8) {
                return Err(error!(shortfall));
            }
        }
        Ok(wanted)
    }

    pub fn credit(&mut self, entries: &[CardAmount]) -> Result<()> {
        let added = totals(entries)?;
        let mut balances = self.balances;
        for (balance, count) in balances.iter_mut().zip(added) {
            *balance = balance.checked_add(count).ok_or(CardError::MathOverflow)?;
        }
        self.balances = balances;
        Ok(())
    }

    /// Removes cards from the wallet. Only the unlocked surplus can leave.
    pub fn debit(&mut self, entries: &[CardAmount]) -> Result<()> {
        let removed = self.ensure_unlocked(entries, CardError::CannotTransferLocked)?;
        for (balance, count) in self.balances.iter_mut().zip(removed) {
            *balance -= count;
        }
        Ok(())
    }

    pub fn lock(&mut self, entries: &[CardAmount]) -> Result<()> {
        let wanted = self.ensure_unlocked(entries, CardError::NotEnoughUnlockedCards)?;
        for (locked, count) in self.locked.iter_mut().zip(wanted) {
            *locked += count;
        }
        Ok(())
    }

    pub fn unlock(&mut self, entries: &[CardAmount]) -> Result<()> {
        let wanted = totals(entries)?;
        require!(
            wanted
                .iter()
                .zip(self.locked.iter())
                .all(|(count, locked)| count <= locked),
            CardError::NotEnoughLockedCards
        );
        for (locked, count) in self.locked.iter_mut().zip(wanted) {
            *locked -= count;
        }
        Ok(())
    }
}
