//! Backing store
//!
//! One fixed buffer shared by every open window. Opening a window claims
//! the next `w * h` bytes at the high-water mark; closing gives them back
//! by moving the mark down again. That is only sound when windows close in
//! reverse open order, so the store keeps the open order and, under
//! `CloseOrder::Lifo`, refuses any other release.

use heapless::Vec;

use super::WindowError;
use crate::config::{CloseOrder, MAX_WINDOWS, STORE_SIZE};

/// A claimed span of the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Claim {
    /// Start offset in the buffer
    pub offset: usize,
    /// Length in bytes
    pub len: usize,
}

impl Claim {
    /// An empty claim at the base of the store
    pub const fn empty() -> Self {
        Self { offset: 0, len: 0 }
    }
}

/// Bump allocator over a fixed byte buffer
#[derive(Clone)]
pub struct BackingStore {
    buffer: [u8; STORE_SIZE],
    /// High-water mark
    cursor: usize,
    /// Slot indices in open order, newest last
    order: Vec<u8, MAX_WINDOWS>,
    policy: CloseOrder,
}

impl BackingStore {
    /// Create an empty store
    pub fn new(policy: CloseOrder) -> Self {
        Self {
            buffer: [0; STORE_SIZE],
            cursor: 0,
            order: Vec::new(),
            policy,
        }
    }

    /// Zero the buffer and forget every claim
    pub fn reset(&mut self) {
        self.buffer.fill(0);
        self.cursor = 0;
        self.order.clear();
    }

    /// Bytes still available
    pub fn remaining(&self) -> usize {
        STORE_SIZE - self.cursor
    }

    /// Current high-water mark
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Slot of the most recently opened window still open
    pub fn newest(&self) -> Option<u8> {
        self.order.last().copied()
    }

    /// Claim `len` bytes for `slot`
    pub fn claim(&mut self, slot: u8, len: usize) -> Result<Claim, WindowError> {
        if len > self.remaining() {
            return Err(WindowError::OutOfStore);
        }
        self.order.push(slot).map_err(|_| WindowError::NoFreeSlot)?;
        let claim = Claim {
            offset: self.cursor,
            len,
        };
        self.cursor += len;
        Ok(claim)
    }

    /// Check that `slot` may release its claim under the current policy
    pub fn check_release(&self, slot: u8) -> Result<(), WindowError> {
        match self.policy {
            CloseOrder::Lifo if self.newest() != Some(slot) => Err(WindowError::OutOfOrder),
            _ => Ok(()),
        }
    }

    /// Release the claim held by `slot`
    ///
    /// Zeroes the claimed bytes and moves the high-water mark back by the
    /// claim's length.
    pub fn release(&mut self, slot: u8, claim: Claim) -> Result<(), WindowError> {
        self.check_release(slot)?;
        if let Some(pos) = self.order.iter().position(|&s| s == slot) {
            self.order.remove(pos);
        }
        if let Some(bytes) = self.buffer.get_mut(claim.offset..claim.offset + claim.len) {
            bytes.fill(0);
        }
        self.cursor = self.cursor.saturating_sub(claim.len);
        Ok(())
    }

    /// Saved bytes of a claim
    pub fn bytes(&self, claim: Claim) -> &[u8] {
        &self.buffer[claim.offset..claim.offset + claim.len]
    }

    /// Saved bytes of a claim, writable
    pub fn bytes_mut(&mut self, claim: Claim) -> &mut [u8] {
        &mut self.buffer[claim.offset..claim.offset + claim.len]
    }
}
