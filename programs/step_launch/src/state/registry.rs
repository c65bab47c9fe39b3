use anchor_lang::prelude::*;

use crate::constants::MAX_LISTINGS;
use crate::error::StepLaunchError;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingEntry {
    pub mint: Pubkey,
    pub creator: Pubkey,
}

/// Creation-ordered sequence of every listing ever created. Append-only:
/// indices are stable and entries are never removed, even after a sale
/// closes. The `mint -> Listing` mapping itself is the listing PDA
/// derivation; this account answers the by-index queries.
#[account]
#[derive(InitSpace)]
pub struct Registry {
    #[max_len(128)]
    pub entries: Vec<ListingEntry>,
    pub bump: u8,
}

impl Registry {
    pub fn len(&self) -> u64 {
        self.entries.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_capacity(&self) -> bool {
        self.entries.len() < MAX_LISTINGS
    }

    /// Appends an entry and returns its stable index.
    pub fn push(&mut self, entry: ListingEntry) -> Result<u64> {
        require!(self.has_capacity(), StepLaunchError::RegistryFull);
        self.entries.push(entry);
        Ok((self.entries.len() - 1) as u64)
    }

    pub fn entry_at(&self, index: u64) -> Result<&ListingEntry> {
        self.entries
            .get(index as usize)
            .ok_or_else(|| error!(StepLaunchError::IndexOutOfRange))
    }
}
