//! Memory-mapped calling convention.
//!
//! Operands and the result live in three 32-bit words at fixed offsets from a
//! base address:
//!
//! | Offset | Direction | Meaning   |
//! |--------|-----------|-----------|
//! | `0x0`  | write     | result    |
//! | `0x4`  | read      | operand A |
//! | `0x8`  | read      | operand B |

use core::fmt;

pub const RESULT_OFFSET: u32 = 0x0;
pub const OPERAND_A_OFFSET: u32 = 0x4;
pub const OPERAND_B_OFFSET: u32 = 0x8;
pub const WORD_BYTES: usize = 4;
/// Bytes spanned by the three contract words.
pub const CONTRACT_BYTES: usize = 3 * WORD_BYTES;

/// Placement of the contract words in an address space.
///
/// A layout always has room for all three words below `u32::MAX`, so the
/// address getters cannot overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryLayout {
    base: u32,
}

impl MemoryLayout {
    /// Layout used by the bare-metal programs: the contract starts at address 0.
    pub const ZERO: MemoryLayout = MemoryLayout { base: 0 };

    /// `None` when the contract words would run past the end of the address space.
    pub const fn new(base: u32) -> Option<Self> {
        match base.checked_add(CONTRACT_BYTES as u32 - 1) {
            Some(_) => Some(Self { base }),
            None => None,
        }
    }

    pub const fn base(&self) -> u32 {
        self.base
    }

    pub const fn result_addr(&self) -> u32 {
        self.base + RESULT_OFFSET
    }

    pub const fn operand_a_addr(&self) -> u32 {
        self.base + OPERAND_A_OFFSET
    }

    pub const fn operand_b_addr(&self) -> u32 {
        self.base + OPERAND_B_OFFSET
    }
}

/// Word-addressed access to whatever backs the contract addresses.
///
/// Loads take `&mut self`: on a device bus a read is itself an access the
/// environment can observe.
pub trait WordMemory {
    type Error;

    fn load_word(&mut self, addr: u32) -> Result<u32, Self::Error>;
    fn store_word(&mut self, addr: u32, value: u32) -> Result<(), Self::Error>;
}

/// Faults raised by [`ScratchMemory`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryFault {
    /// The word at `addr` is not fully inside the buffer.
    OutOfBounds { addr: u32 },
}

impl fmt::Display for MemoryFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryFault::OutOfBounds { addr } => {
                write!(f, "word access at {addr:#x} is out of bounds")
            }
        }
    }
}

impl core::error::Error for MemoryFault {}

/// Hosted stand-in for the fixed addresses: a little-endian byte buffer
/// mapped at address 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScratchMemory<const BYTES: usize = CONTRACT_BYTES> {
    bytes: [u8; BYTES],
}

impl<const BYTES: usize> ScratchMemory<BYTES> {
    pub const fn new() -> Self {
        Self { bytes: [0; BYTES] }
    }

    pub fn as_bytes(&self) -> &[u8; BYTES] {
        &self.bytes
    }

    fn word_range(addr: u32) -> Result<core::ops::Range<usize>, MemoryFault> {
        let start = addr as usize;
        match start.checked_add(WORD_BYTES) {
            Some(end) if end <= BYTES => Ok(start..end),
            _ => Err(MemoryFault::OutOfBounds { addr }),
        }
    }
}

impl<const BYTES: usize> Default for ScratchMemory<BYTES> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const BYTES: usize> WordMemory for ScratchMemory<BYTES> {
    type Error = MemoryFault;

    fn load_word(&mut self, addr: u32) -> Result<u32, MemoryFault> {
        let range = Self::word_range(addr)?;
        let mut word = [0_u8; WORD_BYTES];
        word.copy_from_slice(&self.bytes[range]);
        Ok(u32::from_le_bytes(word))
    }

    fn store_word(&mut self, addr: u32, value: u32) -> Result<(), MemoryFault> {
        let range = Self::word_range(addr)?;
        self.bytes[range].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }
}

/// Writes the operands where the entry shim will read them back, standing in
/// for external input when nothing else fills the addresses.
pub fn seed_operands<M: WordMemory>(
    mem: &mut M,
    layout: MemoryLayout,
    a: u32,
    b: u32,
) -> Result<(), M::Error> {
    mem.store_word(layout.operand_a_addr(), a)?;
    mem.store_word(layout.operand_b_addr(), b)
}
