//! Entry shim: marshals the operands out of memory, runs BinaryGCD and stores
//! the result.
//!
//! ```text
//! Start -> ReadOperands -> Compute -> WriteResult -> Halt
//! ```
//!
//! Both operand words are read before the single result store. `Halt` is
//! terminal: stepping it again touches no memory.

use crate::binary::Variant;
use crate::memory::{MemoryLayout, WordMemory};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Start,
    ReadOperands,
    Compute,
    WriteResult,
    Halt,
}

/// What an observer sees once the shim has halted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Halt {
    pub a: u32,
    pub b: u32,
    pub result: u32,
}

pub struct EntryShim<'m, M: WordMemory> {
    mem: &'m mut M,
    layout: MemoryLayout,
    variant: Variant,
    phase: Phase,
    operands: (u32, u32),
    result: u32,
}

impl<'m, M: WordMemory> EntryShim<'m, M> {
    pub fn new(mem: &'m mut M, layout: MemoryLayout, variant: Variant) -> Self {
        Self {
            mem,
            layout,
            variant,
            phase: Phase::Start,
            operands: (0, 0),
            result: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Performs the work of the current phase and moves to the next one.
    ///
    /// On error the phase is left unchanged.
    pub fn step(&mut self) -> Result<Phase, M::Error> {
        self.phase = match self.phase {
            Phase::Start => Phase::ReadOperands,
            Phase::ReadOperands => {
                let a = self.mem.load_word(self.layout.operand_a_addr())?;
                let b = self.mem.load_word(self.layout.operand_b_addr())?;
                self.operands = (a, b);
                Phase::Compute
            }
            Phase::Compute => {
                let (a, b) = self.operands;
                self.result = self.variant.gcd(a, b);
                Phase::WriteResult
            }
            Phase::WriteResult => {
                self.mem.store_word(self.layout.result_addr(), self.result)?;
                Phase::Halt
            }
            Phase::Halt => Phase::Halt,
        };
        Ok(self.phase)
    }

    /// Drives the shim to `Halt`.
    pub fn run(mut self) -> Result<Halt, M::Error> {
        while self.step()? != Phase::Halt {}
        let (a, b) = self.operands;
        Ok(Halt {
            a,
            b,
            result: self.result,
        })
    }
}

/// Runs one full invocation against `mem`.
pub fn run_entry<M: WordMemory>(
    mem: &mut M,
    layout: MemoryLayout,
    variant: Variant,
) -> Result<Halt, M::Error> {
    EntryShim::new(mem, layout, variant).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{
        MemoryFault, OPERAND_A_OFFSET, OPERAND_B_OFFSET, RESULT_OFFSET, ScratchMemory,
        seed_operands,
    };

    #[derive(Debug, PartialEq, Eq)]
    enum Access {
        Load(u32),
        Store(u32, u32),
    }

    struct Recording {
        inner: ScratchMemory,
        accesses: Vec<Access>,
    }

    impl WordMemory for Recording {
        type Error = MemoryFault;

        fn load_word(&mut self, addr: u32) -> Result<u32, MemoryFault> {
            self.accesses.push(Access::Load(addr));
            self.inner.load_word(addr)
        }

        fn store_word(&mut self, addr: u32, value: u32) -> Result<(), MemoryFault> {
            self.accesses.push(Access::Store(addr, value));
            self.inner.store_word(addr, value)
        }
    }

    fn seeded(a: u32, b: u32) -> Recording {
        let mut inner = ScratchMemory::new();
        seed_operands(&mut inner, MemoryLayout::ZERO, a, b).unwrap();
        Recording {
            inner,
            accesses: Vec::new(),
        }
    }

    #[test]
    fn phases_advance_in_order_and_halt_is_terminal() {
        let mut mem = seeded(48, 18);
        let mut shim = EntryShim::new(&mut mem, MemoryLayout::ZERO, Variant::Iterative);
        assert_eq!(shim.phase(), Phase::Start);
        assert_eq!(shim.step(), Ok(Phase::ReadOperands));
        assert_eq!(shim.step(), Ok(Phase::Compute));
        assert_eq!(shim.step(), Ok(Phase::WriteResult));
        assert_eq!(shim.step(), Ok(Phase::Halt));
        assert_eq!(shim.step(), Ok(Phase::Halt));
        assert_eq!(shim.step(), Ok(Phase::Halt));

        assert_eq!(
            mem.accesses,
            [
                Access::Load(OPERAND_A_OFFSET),
                Access::Load(OPERAND_B_OFFSET),
                Access::Store(RESULT_OFFSET, 6),
            ]
        );
    }

    #[test]
    fn start_touches_no_memory() {
        let mut mem = seeded(1, 1);
        let mut shim = EntryShim::new(&mut mem, MemoryLayout::ZERO, Variant::Recursive);
        shim.step().unwrap();
        drop(shim);
        assert!(mem.accesses.is_empty());
    }

    #[test]
    fn default_operands_halt_with_eleven() {
        for variant in Variant::ALL {
            let mut mem = seeded(99, 22);
            let halt = run_entry(&mut mem, MemoryLayout::ZERO, variant).unwrap();
            assert_eq!(
                halt,
                Halt {
                    a: 99,
                    b: 22,
                    result: 11
                }
            );
            assert_eq!(mem.inner.load_word(RESULT_OFFSET), Ok(11));
            assert_eq!(mem.inner.load_word(OPERAND_A_OFFSET), Ok(99));
            assert_eq!(mem.inner.load_word(OPERAND_B_OFFSET), Ok(22));
        }
    }

    #[test]
    fn fault_stops_before_any_store() {
        let mut mem = ScratchMemory::<8>::new();
        let mut shim = EntryShim::new(&mut mem, MemoryLayout::ZERO, Variant::Iterative);
        assert_eq!(shim.step(), Ok(Phase::ReadOperands));
        assert_eq!(shim.step(), Err(MemoryFault::OutOfBounds { addr: 8 }));
        assert_eq!(shim.phase(), Phase::ReadOperands);
        drop(shim);
        assert_eq!(mem.as_bytes(), &[0; 8]);
    }

    #[test]
    fn shifted_base_uses_relative_offsets() {
        let layout = MemoryLayout::new(16).unwrap();
        let mut mem = ScratchMemory::<32>::new();
        seed_operands(&mut mem, layout, 1024, 64).unwrap();
        let halt = run_entry(&mut mem, layout, Variant::Recursive).unwrap();
        assert_eq!(halt.result, 64);
        assert_eq!(mem.load_word(16), Ok(64));
        assert_eq!(mem.load_word(RESULT_OFFSET), Ok(0));
    }
}
