/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::de::{Deserializer, Error};
use serde::{Deserialize, Serialize};

use crate::suffix::suffix;
use crate::{Dimension, Ratio, UnitError};

/// Run-time description of a unit: its dimension, its size relative
/// to the dimension's reference unit and its zero-point offset.
///
/// Statically typed units expose theirs through `Unit::DESCRIPTOR`.
#[derive(Serialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct UnitDescriptor {
    dimension: Dimension,
    scale: Ratio,
    #[cfg_attr(feature = "schemars", schemars(default = "zero_offset"))]
    offset: Ratio,
}

#[derive(Deserialize)]
struct DescriptorRepr {
    dimension: Dimension,
    scale: Ratio,
    #[serde(default = "zero_offset")]
    offset: Ratio,
}

fn zero_offset() -> Ratio {
    Ratio::ZERO
}

impl UnitDescriptor {
    /// The scale must be positive; a non-positive scale is a unit
    /// definition error and panics (at compile time for `const` units).
    pub const fn new(
        dimension: Dimension,
        scale: Ratio,
        offset: Ratio,
    ) -> Self {
        if scale.num() <= 0 {
            panic!("unit scale must be positive");
        }
        UnitDescriptor {
            dimension,
            scale,
            offset,
        }
    }

    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub const fn scale(&self) -> Ratio {
        self.scale
    }

    pub const fn offset(&self) -> Ratio {
        self.offset
    }

    /// Same dimension, regardless of scale and offset.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.dimension == other.dimension
    }

    pub fn suffix(&self) -> &'static str {
        suffix(self.dimension, self.scale)
    }

    /// The dimension's reference unit.
    pub fn normalize(&self) -> Self {
        self.dimension.reference_unit()
    }

    /// Converts a magnitude expressed in this unit into `other`.
    ///
    /// The scale factor is computed exactly before it touches the
    /// value. The offset correction only compares offset numerators:
    /// when they differ, a larger source offset is subtracted, else the
    /// target offset is added. That is exact for a single offset unit
    /// against zero-offset partners, not a general affine transform.
    pub fn convert(&self, other: &Self, val: f64) -> Result<f64, UnitError> {
        if self.dimension != other.dimension {
            log::debug!(
                "refusing conversion from {} ({}) to {} ({})",
                self,
                self.dimension,
                other,
                other.dimension
            );
            return Err(UnitError::IncompatibleDimension {
                from: self.dimension,
                to: other.dimension,
            });
        }

        let factor = self.scale.divide(other.scale);
        let mut result = factor.apply(val);

        if self.offset.num() != other.offset.num() {
            match self.offset.num() > other.offset.num() {
                true => result -= self.offset.num() as f64,
                false => result += other.offset.num() as f64,
            }
        }

        log::trace!("converted {} {} -> {} {}", val, self, result, other);
        Ok(result)
    }
}

impl<'de> Deserialize<'de> for UnitDescriptor {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let repr = DescriptorRepr::deserialize(deserializer)?;
        match repr.scale.num() > 0 {
            true => Ok(UnitDescriptor {
                dimension: repr.dimension,
                scale: repr.scale,
                offset: repr.offset,
            }),
            false => Err(D::Error::custom(format!(
                "invalid scale {} for {} unit: must be positive",
                repr.scale, repr.dimension
            ))),
        }
    }
}

impl Display for UnitDescriptor {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.suffix())
    }
}
