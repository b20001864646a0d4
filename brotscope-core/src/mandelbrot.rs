use crate::complex::Complex;

/// Squared bailout radius: orbits with `|z|² >= 4` have escaped.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// How a single point was classified by [`escape_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationResult {
    /// Inside the main cardioid or the period-2 bulb. The loop never ran.
    Interior,

    /// The loop ran all the way to the cap without escaping.
    Bounded,

    /// The orbit left the bailout circle after `iterations` steps (`< cap`).
    Escaped { iterations: u32 },
}

impl IterationResult {
    /// The iteration count `n` used for coloring.
    #[inline]
    pub fn count(self, cap: u32) -> u32 {
        match self {
            Self::Interior | Self::Bounded => cap,
            Self::Escaped { iterations } => iterations,
        }
    }
}

/// Returns `true` if `(a, b)` lies strictly inside the main cardioid.
///
/// Closed-form check that skips iteration for a large share of interior
/// points at the default view.
#[inline]
pub fn in_main_cardioid(a: f64, b: f64) -> bool {
    let b2 = b * b;
    let q = (a - 0.25) * (a - 0.25) + b2;
    q * (q + a - 0.25) < 0.25 * b2
}

/// Returns `true` if `(a, b)` lies strictly inside the period-2 bulb.
#[inline]
pub fn in_period2_bulb(a: f64, b: f64) -> bool {
    (a + 1.0) * (a + 1.0) + b * b < 0.0625
}

/// Iterate `z ← z² + c` starting from `z₀ = c`, counting steps while
/// `|z|² < 4` and `n < cap`.
#[inline]
pub fn escape_time(c: Complex, cap: u32) -> IterationResult {
    if in_period2_bulb(c.re, c.im) || in_main_cardioid(c.re, c.im) {
        return IterationResult::Interior;
    }

    let mut z = c;
    let mut n = 0;
    while z.norm_sq() < ESCAPE_RADIUS_SQ && n < cap {
        z = z.square_add(c);
        n += 1;
    }

    if n == cap {
        IterationResult::Bounded
    } else {
        IterationResult::Escaped { iterations: n }
    }
}
