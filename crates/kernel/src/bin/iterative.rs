#![no_std]
#![no_main]

use gcd::Variant;

#[unsafe(no_mangle)]
pub extern "C" fn _start() -> ! {
    // SAFETY: the target's memory map backs the contract words at address 0.
    unsafe { kernel::start(Variant::Iterative) }
}
