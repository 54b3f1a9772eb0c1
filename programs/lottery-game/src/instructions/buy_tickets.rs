use anchor_lang::prelude::*;
use anchor_lang::system_program;
use lottery_card::cpi::accounts::AdjustLocks;
use lottery_card::program::LotteryCard;
use lottery_card::state::{pair_entries, totals, CardAmount, CardCollection, CardWallet};

use crate::constants::*;
use crate::error::LotteryError;
use crate::events::{GameFinished, TicketsBought};
use crate::state::*;

/// Accounts required to enter round `round_id`.
///
/// `card_wallet` is only needed when cards are locked for the entry.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct BuyTickets<'info> {
    /// The participant. Pays the entry price and the ticket rent.
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
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

    /// Created by the first entry; an existing ticket means a second entry.
    #[account(
        init_if_needed,
        payer = player,
        space = 8 + Ticket::INIT_SPACE,
        seeds = [TICKET_SEED, round_id.to_le_bytes().as_ref(), player.key().as_ref()],
        bump
    )]
    pub ticket: Box<Account<'info, Ticket>>,

    #[account(
        mut,
        seeds = [MEGA_JACKPOT_SEED],
        bump = mega_jackpot.bump,
    )]
    pub mega_jackpot: Box<Account<'info, MegaJackpot>>,

    /// Exists once the player is registered for the current mega jackpot epoch.
    #[account(
        init_if_needed,
        payer = player,
        space = 8 + InvestorRecord::INIT_SPACE,
        seeds = [
            INVESTOR_SEED,
            mega_jackpot.epoch.to_le_bytes().as_ref(),
            player.key().as_ref(),
        ],
        bump
    )]
    pub investor_record: Box<Account<'info, InvestorRecord>>,

    /// Registry page that receives the next investor.
    #[account(
        init_if_needed,
        payer = player,
        space = 8 + InvestorPage::INIT_SPACE,
        seeds = [
            INVESTOR_PAGE_SEED,
            mega_jackpot.epoch.to_le_bytes().as_ref(),
            mega_jackpot.open_page().to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub investor_page: Box<Account<'info, InvestorPage>>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = game_state.vault_bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        address = game_state.card_collection @ LotteryError::IncorrectCardCollection,
    )]
    pub card_collection: Box<Account<'info, CardCollection>>,

    /// Player's card wallet. The card program checks its address on lock.
    #[account(mut)]
    pub card_wallet: Option<Account<'info, CardWallet>>,

    /// CHECK: PDA signer for the card lock call.
    #[account(
        seeds = [GAME_AUTHORITY_SEED],
        bump = game_state.authority_bump,
    )]
    pub game_authority: UncheckedAccount<'info>,

    pub card_program: Program<'info, LotteryCard>,

    pub system_program: Program<'info, System>,
}

/// Cards requested for an entry, one item per card type, zero counts dropped.
pub fn locked_entries(card_type_ids: &[u8], counts: &[u64]) -> Result<Vec<CardAmount>> {
    let requested = pair_entries(card_type_ids, counts)
        .map_err(|_| error!(LotteryError::LengthMismatch))?;
    Ok(totals(&requested)?
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(card_type_id, &count)| CardAmount {
            card_type_id: card_type_id as u8,
            count,
        })
        .collect())
}

/// Ticket weight is the card boost, or a single ticket without cards.
pub fn ticket_weight(boost: u64) -> u64 {
    if boost > 0 {
        boost
    } else {
        1
    }
}

/// Enters the round, locking the requested cards for its duration.
///
/// Steps performed:
/// 1. Check the round accepts this player at this price.
/// 2. Price the requested cards into a ticket weight.
/// 3. Move the entry price into the vault.
/// 4. Lock the cards through the card program.
/// 5. Record the entry; the round finishes once its target is reached.
/// 6. Register the player for the mega jackpot draw, once per epoch.
///
/// # Arguments
/// * `round_id` - round to enter
/// * `card_type_ids`, `counts` - cards to lock, as parallel lists
/// * `seed` - participant entropy folded into the draws
/// * `amount` - lamports paid, must equal the round's entry price
pub fn process_buy_tickets(
    ctx: Context<BuyTickets>,
    round_id: u64,
    card_type_ids: Vec<u8>,
    counts: Vec<u64>,
    seed: u64,
    amount: u64,
) -> Result<()> {
    let player = ctx.accounts.player.key();

    ctx.accounts.round.check_entry(&player, amount)?;
    require_keys_eq!(
        ctx.accounts.ticket.player,
        Pubkey::default(),
        LotteryError::InvalidEntry
    );

    let cards = locked_entries(&card_type_ids, &counts)?;
    let boost = if cards.is_empty() {
        0
    } else {
        let card_wallet = ctx
            .accounts
            .card_wallet
            .as_ref()
            .ok_or(LotteryError::MissingCardWallet)?;
        require_keys_eq!(card_wallet.owner, player, LotteryError::IncorrectCardWallet);
        ctx.accounts.card_collection.boost(card_wallet, &cards)?
    };
    let tickets = ticket_weight(boost);

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    if let Some(card_wallet) = &ctx.accounts.card_wallet {
        if !cards.is_empty() {
            let signer_seeds: &[&[&[u8]]] =
                &[&[GAME_AUTHORITY_SEED, &[ctx.accounts.game_state.authority_bump]]];
            lottery_card::cpi::batch_lock_cards(
                CpiContext::new_with_signer(
                    ctx.accounts.card_program.to_account_info(),
                    AdjustLocks {
                        card_collection: ctx.accounts.card_collection.to_account_info(),
                        game_authority: ctx.accounts.game_authority.to_account_info(),
                        card_wallet: card_wallet.to_account_info(),
                    },
                    signer_seeds,
                ),
                player,
                cards.iter().map(|c| c.card_type_id).collect(),
                cards.iter().map(|c| c.count).collect(),
            )?;
        }
    }

    let round = &mut ctx.accounts.round;
    let finished = round.record_entry(player, tickets, seed, !cards.is_empty())?;

    let ticket = &mut ctx.accounts.ticket;
    ticket.round_id = round_id;
    ticket.player = player;
    ticket.tickets = tickets;
    ticket.locked_cards = cards.clone();
    ticket.released = false;
    ticket.bump = ctx.bumps.ticket;

    let game_state = &mut ctx.accounts.game_state;
    game_state.commit(round.entry_price)?;
    if finished {
        game_state.deactivate_round(round_id);
    }

    let mega_jackpot = &mut ctx.accounts.mega_jackpot;
    mega_jackpot.mix(&player, seed);
    let investor_page = &mut ctx.accounts.investor_page;
    investor_page.epoch = mega_jackpot.epoch;
    investor_page.page = mega_jackpot.open_page();
    investor_page.bump = ctx.bumps.investor_page;
    let investor_record = &mut ctx.accounts.investor_record;
    if investor_record.player == Pubkey::default() {
        let index = mega_jackpot.register(investor_page, player)?;
        investor_record.epoch = mega_jackpot.epoch;
        investor_record.player = player;
        investor_record.index = index;
        investor_record.bump = ctx.bumps.investor_record;
        msg!("{} registered as investor {}", player, index);
    }

    msg!(
        "{} entered round {} with {} tickets, size {}",
        player,
        round_id,
        tickets,
        round.current_size
    );
    emit!(TicketsBought {
        round_id,
        player,
        tickets,
        locked_cards: cards,
        current_size: round.current_size,
    });

    if finished {
        msg!("Round {} finished", round_id);
        emit!(GameFinished {
            round_id,
            current_size: round.current_size,
            participants: round.participants.len() as u32,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::{round, ENTRY};
    use lottery_card::error::CardError;
    use lottery_card::state::CardTier;

    fn collection() -> CardCollection {
        let mut collection = CardCollection {
            authority: Pubkey::new_unique(),
            lottery_game: Pubkey::new_unique(),
            base_uri: String::new(),
            card_types: Vec::new(),
            bump: 255,
        };
        for tier in [CardTier::Diamond, CardTier::Platinum, CardTier::Gold] {
            collection
                .add_card_type(tier, LAMPORTS_PER_SOL / 10, 1_000)
                .unwrap();
        }
        collection
    }

    fn wallet(owner: Pubkey, balances: &[(u8, u64)]) -> CardWallet {
        let mut wallet = CardWallet {
            owner,
            balances: [0; lottery_card::constants::MAX_CARD_TYPES],
            locked: [0; lottery_card::constants::MAX_CARD_TYPES],
            bump: 255,
        };
        for &(card_type_id, count) in balances {
            wallet.balances[card_type_id as usize] = count;
        }
        wallet
    }

    #[test]
    fn test_locked_entries_merge_and_drop_zero_counts() {
        let cards = locked_entries(&[2, 0, 2, 1], &[1, 3, 2, 0]).unwrap();
        assert_eq!(
            cards,
            vec![
                CardAmount {
                    card_type_id: 0,
                    count: 3
                },
                CardAmount {
                    card_type_id: 2,
                    count: 3
                },
            ]
        );
        assert!(locked_entries(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_locked_entries_need_paired_lists() {
        assert_eq!(
            locked_entries(&[0, 1], &[1]).unwrap_err(),
            LotteryError::LengthMismatch.into()
        );
        assert_eq!(
            locked_entries(&[MAX_LOCKED_ENTRIES as u8], &[1]).unwrap_err(),
            CardError::InvalidCardType.into()
        );
    }

    #[test]
    fn test_ticket_weight_defaults_to_one() {
        assert_eq!(ticket_weight(0), 1);
        assert_eq!(ticket_weight(60), 60);
    }

    #[test]
    fn test_diamond_card_entry() {
        let player = Pubkey::new_unique();
        let collection = collection();
        let mut wallet = wallet(player, &[(0, 1)]);
        let mut round = round(LAMPORTS_PER_SOL);

        let cards = locked_entries(&[0], &[1]).unwrap();
        let tickets = ticket_weight(collection.boost(&wallet, &cards).unwrap());
        round.check_entry(&player, ENTRY).unwrap();
        wallet.lock(&cards).unwrap();
        round.record_entry(player, tickets, 42, true).unwrap();

        assert_eq!(round.tickets_of(&player), 60);
        assert_eq!(wallet.locked[0], 1);
        assert_eq!(wallet.unlocked(0), 0);
        assert_eq!(round.boosted_entrants, 1);
        assert!(!round.all_cards_released());
    }

    #[test]
    fn test_locked_cards_cannot_boost_twice() {
        let player = Pubkey::new_unique();
        let collection = collection();
        let mut wallet = wallet(player, &[(1, 2)]);

        let cards = locked_entries(&[1], &[2]).unwrap();
        assert_eq!(collection.boost(&wallet, &cards).unwrap(), 80);
        wallet.lock(&cards).unwrap();

        assert_eq!(
            collection.boost(&wallet, &cards).unwrap_err(),
            CardError::NotEnoughUnlockedCards.into()
        );
    }

    #[test]
    fn test_every_entrant_stays_eligible() {
        let mut mega = crate::state::tests::mega_jackpot();
        let players: Vec<Pubkey> = (0..2 * MAX_PARTICIPANTS).map(|_| Pubkey::new_unique()).collect();
        let pages = crate::state::tests::register_all(&mut mega, &players);

        assert_eq!(mega.investor_count, players.len() as u64);
        let registered: Vec<Pubkey> = pages.iter().flat_map(|p| p.investors.clone()).collect();
        assert_eq!(registered, players);
    }
}
