//! Build-time operand configuration.
//!
//! The bare-metal programs have no input channel, so the operands are fixed
//! when the crate is compiled. `GCD_A` and `GCD_B` override the defaults:
//!
//! ```text
//! GCD_A=48 GCD_B=0x12 cargo build -p kernel --features binaries --target riscv32i-unknown-none-elf
//! ```
//!
//! A value that does not parse fails the build.

use core::fmt;

pub const DEFAULT_A: u32 = 99;
pub const DEFAULT_B: u32 = 22;

pub const OPERAND_A: u32 = match option_env!("GCD_A") {
    None => DEFAULT_A,
    Some(text) => match parse_operand(text) {
        Ok(value) => value,
        Err(_) => panic!("GCD_A must be a decimal or 0x-prefixed u32 literal"),
    },
};

pub const OPERAND_B: u32 = match option_env!("GCD_B") {
    None => DEFAULT_B,
    Some(text) => match parse_operand(text) {
        Ok(value) => value,
        Err(_) => panic!("GCD_B must be a decimal or 0x-prefixed u32 literal"),
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No digits, after stripping any `0x` prefix and `_` separators.
    Empty,
    /// Byte at `index` is not a digit of the literal's radix.
    InvalidDigit { index: usize },
    /// The literal does not fit in a `u32`.
    Overflow,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Empty => f.write_str("operand literal has no digits"),
            ConfigError::InvalidDigit { index } => {
                write!(f, "invalid digit at byte {index} of operand literal")
            }
            ConfigError::Overflow => f.write_str("operand literal does not fit in 32 bits"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Parses a decimal or `0x`-prefixed hexadecimal `u32`, ignoring `_`.
pub const fn parse_operand(text: &str) -> Result<u32, ConfigError> {
    let bytes = text.as_bytes();
    let (radix, mut i) = if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] | 0x20) == b'x' {
        (16_u32, 2)
    } else {
        (10_u32, 0)
    };

    let mut value = 0_u32;
    let mut digits = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        i += 1;
        let digit = match byte {
            b'_' => continue,
            b'0'..=b'9' => (byte - b'0') as u32,
            b'a'..=b'f' if radix == 16 => (byte - b'a' + 10) as u32,
            b'A'..=b'F' if radix == 16 => (byte - b'A' + 10) as u32,
            _ => return Err(ConfigError::InvalidDigit { index: i - 1 }),
        };
        value = match value.checked_mul(radix) {
            Some(shifted) => shifted,
            None => return Err(ConfigError::Overflow),
        };
        value = match value.checked_add(digit) {
            Some(sum) => sum,
            None => return Err(ConfigError::Overflow),
        };
        digits += 1;
    }

    if digits == 0 {
        return Err(ConfigError::Empty);
    }
    Ok(value)
}
