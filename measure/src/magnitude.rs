/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

/// Numeric input accepted when constructing a quantity. Integral and
/// floating-point values are both stored as `f64`.
pub trait Magnitude: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_magnitude {
    ($($t:ty),+) => {
        $(
            impl Magnitude for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

impl_magnitude!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
