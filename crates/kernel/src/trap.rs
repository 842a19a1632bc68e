/// Hands control to the attached debugger or emulator with `ebreak`.
///
/// Nothing executes after the trap: the instruction is marked as never
/// returning, so no fallthrough code is emitted.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
#[inline(always)]
pub fn halt() -> ! {
    // SAFETY: `ebreak` touches no Rust-visible state; the debugger owns the hart from here.
    unsafe { core::arch::asm!("ebreak", options(noreturn, nostack)) }
}

/// Off RISC-V there is no trap to raise, so the core parks in a spin loop.
#[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
#[inline(always)]
pub fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}

#[cfg(all(target_os = "none", not(test)))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    halt()
}
