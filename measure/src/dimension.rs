/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::descriptor::UnitDescriptor;
use crate::units::{Celsius, Meters, Minutes};
use crate::Unit;

/// Base dimensions. These can be considered a unit's "type".
/// Conversion is possible only between units of the same
/// dimension.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serialize_as_string", serde(rename_all = "snake_case"))]
pub enum Dimension {
    Length = 1,
    Temperature = 2,
    Time = 3,
}

impl Dimension {
    pub const LIST: &[Self] =
        &[Dimension::Length, Dimension::Temperature, Dimension::Time];

    /// Stable numeric identity of the dimension.
    pub const fn id(&self) -> u8 {
        *self as u8
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Dimension::Length => "L",
            Dimension::Temperature => "Θ",
            Dimension::Time => "T",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Temperature => "temperature",
            Dimension::Time => "time",
        }
    }

    /// The unit all other units of this dimension are scaled against.
    pub const fn reference_unit(&self) -> UnitDescriptor {
        match self {
            Dimension::Length => Meters::DESCRIPTOR,
            Dimension::Temperature => Celsius::DESCRIPTOR,
            Dimension::Time => Minutes::DESCRIPTOR,
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}
