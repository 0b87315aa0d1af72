//! Sparse Data Memory.
//!
//! Byte-addressed, little-endian backing store for the harness. Only bytes
//! that have been written occupy space; everything else reads as zero.
//! Addresses wrap to the 28-bit space the core can drive.

use std::collections::BTreeMap;

use crate::common::constants::ADDRESS_MASK;
use crate::core::signals::AccessWidth;

/// Sparse little-endian byte memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataMemory {
    bytes: BTreeMap<u32, u8>,
}

impl DataMemory {
    /// Creates an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads one byte.
    pub fn read_u8(&self, addr: u32) -> u8 {
        self.bytes.get(&(addr & ADDRESS_MASK)).copied().unwrap_or(0)
    }

    /// Writes one byte. Zero bytes are dropped from the map.
    pub fn write_u8(&mut self, addr: u32, value: u8) {
        let addr = addr & ADDRESS_MASK;
        if value == 0 {
            let _ = self.bytes.remove(&addr);
        } else {
            let _ = self.bytes.insert(addr, value);
        }
    }

    /// Reads the 32-bit little-endian word starting at `addr`.
    pub fn read_word(&self, addr: u32) -> u32 {
        u32::from_le_bytes([
            self.read_u8(addr),
            self.read_u8(addr.wrapping_add(1)),
            self.read_u8(addr.wrapping_add(2)),
            self.read_u8(addr.wrapping_add(3)),
        ])
    }

    /// Writes the low `width` bytes of `value` at `addr`.
    pub fn write(&mut self, addr: u32, value: u32, width: AccessWidth) {
        for (i, byte) in value.to_le_bytes().into_iter().take(width.bytes() as usize).enumerate() {
            self.write_u8(addr.wrapping_add(i as u32), byte);
        }
    }

    /// Writes a full word at `addr`.
    pub fn write_word(&mut self, addr: u32, value: u32) {
        self.write(addr, value, AccessWidth::Word);
    }

    /// Non-zero bytes in address order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u8)> + '_ {
        self.bytes.iter().map(|(&a, &b)| (a, b))
    }

    /// Whether every byte reads as zero.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
