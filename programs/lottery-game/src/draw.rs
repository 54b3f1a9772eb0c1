use anchor_lang::prelude::*;
use solana_program::hash::hashv;

use crate::error::LotteryError;
use crate::state::Participant;

/// Folds a participant's seed into an entropy chain.
pub fn mix(entropy: &[u8; 32], player: &Pubkey, seed: u64) -> [u8; 32] {
    hashv(&[entropy.as_ref(), player.as_ref(), seed.to_le_bytes().as_ref()]).to_bytes()
}

/// Combines accumulated participant entropy with an oracle value, so neither
/// the participants nor the oracle alone decide the draw.
pub fn randomness(entropy: &[u8; 32], revealed: &[u8; 32]) -> [u8; 32] {
    hashv(&[entropy.as_ref(), revealed.as_ref()]).to_bytes()
}

/// Independent 64-bit value number `nonce` derived from `randomness`.
fn roll(randomness: &[u8; 32], nonce: u64) -> u64 {
    let digest = hashv(&[randomness.as_ref(), nonce.to_le_bytes().as_ref()]).to_bytes();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Picks one participant with probability proportional to its ticket count.
pub fn pick_weighted(participants: &[Participant], randomness: &[u8; 32]) -> Result<usize> {
    let total = participants
        .iter()
        .try_fold(0u128, |acc, p| acc.checked_add(p.tickets as u128))
        .ok_or(LotteryError::MathOverflow)?;
    require!(total > 0, LotteryError::NoParticipants);

    let point = roll(randomness, 0) as u128 % total;

    let mut cumulative = 0u128;
    for (i, participant) in participants.iter().enumerate() {
        cumulative += participant.tickets as u128;
        if point < cumulative {
            return Ok(i);
        }
    }
    // `point < total` guarantees the scan returns.
    Err(error!(LotteryError::MathOverflow))
}

/// Picks `count` distinct indices out of `0..len` with a partial
/// Fisher-Yates shuffle. `count` is clamped to `len`.
pub fn pick_distinct(len: usize, count: usize, randomness: &[u8; 32]) -> Vec<usize> {
    let count = count.min(len);
    let mut indices: Vec<usize> = (0..len).collect();
    for i in 0..count {
        let remaining = (len - i) as u64;
        let j = i + (roll(randomness, i as u64 + 1) % remaining) as usize;
        indices.swap(i, j);
    }
    indices.truncate(count);
    indices
}

/// Uniform index into a list of `len` items.
pub fn pick_index(len: usize, randomness: &[u8; 32]) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((roll(randomness, 0) % len as u64) as usize)
}
