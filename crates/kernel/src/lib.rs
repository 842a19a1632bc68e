//! Bare-metal side of the GCD program: operand configuration, the volatile
//! bus over the fixed contract addresses, and the `ebreak` halt.

#![cfg_attr(not(test), no_std)]

pub mod bus;
pub mod config;
pub mod trap;

use gcd::{MemoryLayout, Variant, run_entry, seed_operands};

use crate::bus::VolatileBus;

/// Program body behind `_start`: seed the configured operands at 0x4 and 0x8,
/// compute, store the GCD at 0x0, then trap.
///
/// # Safety
/// Addresses 0x0 through 0xB must be mapped, writable RAM owned by nothing
/// else in the program.
pub unsafe fn start(variant: Variant) -> ! {
    // SAFETY: forwarded to the caller.
    let mut bus = unsafe { VolatileBus::physical() };
    let layout = MemoryLayout::ZERO;
    let Ok(()) = seed_operands(&mut bus, layout, config::OPERAND_A, config::OPERAND_B);
    let Ok(_) = run_entry(&mut bus, layout, variant);
    trap::halt()
}
