/// Binary (Stein's) GCD using only shifts, comparisons, subtraction and parity tests.
///
/// `gcd_binary(0, 0) == 0`. The final `<< shift` cannot overflow: `shift` only
/// grows while both operands are nonzero and even, so it stays below 32, and
/// the shifted value is the GCD of the inputs, which fits in a `u32`.
pub fn gcd_binary(mut a: u32, mut b: u32) -> u32 {
    let mut shift = 0_u32;
    loop {
        if a == 0 {
            debug_assert!(shift < u32::BITS);
            return b << shift;
        }
        if b == 0 {
            debug_assert!(shift < u32::BITS);
            return a << shift;
        }

        let a_even = a & 1 == 0;
        let b_even = b & 1 == 0;

        match (a_even, b_even) {
            (true, true) => {
                a >>= 1;
                b >>= 1;
                shift += 1;
            }
            (true, false) => a >>= 1,
            (false, true) => b >>= 1,
            (false, false) => {
                if a <= b {
                    b -= a;
                } else {
                    (a, b) = (b, a - b);
                }
            }
        }
    }
}

/// Recursive form of [`gcd_binary`].
///
/// Each shared factor of two is restored with a `<< 1` on the way back up.
/// Depth grows with the bit length of the operands rather than their
/// magnitude, about one frame per halving plus one per odd subtraction.
pub fn gcd_binary_recursive(a: u32, b: u32) -> u32 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    match (a & 1 == 0, b & 1 == 0) {
        (true, true) => gcd_binary_recursive(a >> 1, b >> 1) << 1,
        (true, false) => gcd_binary_recursive(a >> 1, b),
        (false, true) => gcd_binary_recursive(a, b >> 1),
        (false, false) if a <= b => gcd_binary_recursive(a, b - a),
        (false, false) => gcd_binary_recursive(b, a - b),
    }
}

/// Which BinaryGCD entry point a caller runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Iterative,
    Recursive,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Iterative, Variant::Recursive];

    pub fn gcd(self, a: u32, b: u32) -> u32 {
        match self {
            Variant::Iterative => gcd_binary(a, b),
            Variant::Recursive => gcd_binary_recursive(a, b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Iterative => "iterative",
            Variant::Recursive => "recursive",
        }
    }
}
