/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::de::{Deserializer, Error};
use serde::{Deserialize, Serialize};

/// An exact rational number, used for unit scales and offsets.
///
/// Ratios are always kept in lowest terms with a positive denominator,
/// so that structural equality is numeric equality. Construction is
/// `const`: a malformed ratio in a unit definition fails at compile
/// time.
#[derive(Serialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Ratio {
    num: i64,
    den: i64,
}

#[derive(Deserialize)]
struct RatioRepr {
    num: i64,
    den: i64,
}

impl Ratio {
    pub const ZERO: Self = Ratio::integer(0);
    pub const ONE: Self = Ratio::integer(1);

    pub const fn new(num: i64, den: i64) -> Self {
        if den == 0 {
            panic!("ratio denominator must be non-zero");
        }
        Self::reduce(num as i128, den as i128)
    }

    pub const fn integer(n: i64) -> Self {
        Ratio { num: n, den: 1 }
    }

    pub const fn num(&self) -> i64 {
        self.num
    }

    pub const fn den(&self) -> i64 {
        self.den
    }

    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Exact quotient `self / rhs`, computed by cross-multiplication.
    /// The factor stays in `i128`, where the product of two `i64`
    /// components always fits. A zero divisor yields a factor with a
    /// zero denominator, which applies as a non-finite value.
    pub const fn divide(self, rhs: Self) -> Factor {
        let (num, den) = (
            self.num as i128 * rhs.den as i128,
            self.den as i128 * rhs.num as i128,
        );
        let g = gcd(num, den);
        match den < 0 {
            true => Factor {
                num: -num / g,
                den: -den / g,
            },
            false => Factor {
                num: num / g,
                den: den / g,
            },
        }
    }

    const fn reduce(num: i128, den: i128) -> Self {
        match Self::checked_reduce(num, den) {
            Some(r) => r,
            None => panic!("ratio out of range"),
        }
    }

    /// Lowest terms with a positive denominator, or `None` when the
    /// denominator is zero or the result does not fit in `i64`.
    const fn checked_reduce(num: i128, den: i128) -> Option<Self> {
        if den == 0 {
            return None;
        }
        let g = gcd(num, den);
        let (num, den) = match den < 0 {
            true => (-num / g, -den / g),
            false => (num / g, den / g),
        };
        if num > i64::MAX as i128
            || num < i64::MIN as i128
            || den > i64::MAX as i128
        {
            return None;
        }
        Some(Ratio {
            num: num as i64,
            den: den as i64,
        })
    }
}

/// Conversion factor between two scales, kept in lowest terms.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Factor {
    num: i128,
    den: i128,
}

impl Factor {
    pub const fn num(&self) -> i128 {
        self.num
    }

    pub const fn den(&self) -> i128 {
        self.den
    }

    /// Multiplies `value` by the numerator first and divides by the
    /// denominator afterwards.
    pub fn apply(&self, value: f64) -> f64 {
        value * self.num as f64 / self.den as f64
    }
}

const fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    match a {
        0 => 1,
        _ => a,
    }
}

impl<'de> Deserialize<'de> for Ratio {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let RatioRepr { num, den } = RatioRepr::deserialize(deserializer)?;
        match den {
            0 => Err(D::Error::custom(format!("invalid ratio {}/0", num))),
            den => Self::checked_reduce(num as i128, den as i128)
                .ok_or_else(|| D::Error::custom("ratio out of range")),
        }
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.den {
            1 => write!(f, "{}", self.num),
            den => write!(f, "{}/{}", self.num, den),
        }
    }
}
