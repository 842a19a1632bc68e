//! Binary GCD over `u32` and the memory-mapped entry contract that runs it.
//!
//! The crate is `no_std`: the same code drives the bare-metal programs in the
//! `kernel` crate and the hosted [`ScratchMemory`] used by tests.

#![cfg_attr(not(test), no_std)]

mod binary;
mod memory;
mod shim;

pub use binary::{Variant, gcd_binary, gcd_binary_recursive};
pub use memory::{
    CONTRACT_BYTES, MemoryFault, MemoryLayout, OPERAND_A_OFFSET, OPERAND_B_OFFSET,
    RESULT_OFFSET, ScratchMemory, WORD_BYTES, WordMemory, seed_operands,
};
pub use shim::{EntryShim, Halt, Phase, run_entry};
