use core::convert::Infallible;
use core::ptr;

use gcd::WordMemory;

/// Word accesses straight to physical addresses with volatile loads and stores.
///
/// Address `addr` maps to `origin + addr`. The bare-metal programs use an
/// origin of 0, so contract addresses are physical addresses.
pub struct VolatileBus {
    origin: *mut u8,
}

impl VolatileBus {
    /// Bus over the whole physical address space.
    ///
    /// # Safety
    /// Every address passed to the bus must be a mapped, 4-byte aligned word
    /// that no Rust object occupies.
    pub unsafe fn physical() -> Self {
        Self {
            origin: ptr::with_exposed_provenance_mut(0),
        }
    }

    /// Bus whose address 0 is `origin`.
    ///
    /// # Safety
    /// `origin` must be 4-byte aligned and valid for volatile reads and writes
    /// of every word the bus is asked to touch, for as long as the bus lives.
    pub unsafe fn from_origin(origin: *mut u8) -> Self {
        Self { origin }
    }

    fn word(&self, addr: u32) -> *mut u32 {
        self.origin.wrapping_add(addr as usize).cast()
    }
}

impl WordMemory for VolatileBus {
    type Error = Infallible;

    fn load_word(&mut self, addr: u32) -> Result<u32, Infallible> {
        // SAFETY: upheld by the constructor contract.
        Ok(unsafe { ptr::read_volatile(self.word(addr)) })
    }

    fn store_word(&mut self, addr: u32, value: u32) -> Result<(), Infallible> {
        // SAFETY: upheld by the constructor contract.
        unsafe { ptr::write_volatile(self.word(addr), value) };
        Ok(())
    }
}
