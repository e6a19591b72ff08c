/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::Debug;

use crate::{Dimension, Ratio, UnitDescriptor};

/// A statically known unit: a zero-size marker type carrying its
/// dimension, its scale relative to the dimension's reference unit and
/// its zero-point offset as associated constants.
pub trait Unit: Copy + Debug + Default + Send + Sync + 'static {
    const DIMENSION: Dimension;
    const SCALE: Ratio;
    const OFFSET: Ratio = Ratio::ZERO;

    const DESCRIPTOR: UnitDescriptor =
        UnitDescriptor::new(Self::DIMENSION, Self::SCALE, Self::OFFSET);

    fn suffix() -> &'static str {
        Self::DESCRIPTOR.suffix()
    }
}
