/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::quantity::Indented;
use crate::{Dimension, Quantity, Unit, UnitDescriptor, UnitError};

/// A magnitude tagged with a unit known only at run time.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DynQuantity {
    pub value: f64,
    pub unit: UnitDescriptor,
}

impl DynQuantity {
    pub fn new(value: f64, unit: UnitDescriptor) -> Self {
        DynQuantity { value, unit }
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    pub fn convert(self, unit: &UnitDescriptor) -> Result<Self, UnitError> {
        Ok(DynQuantity::new(self.unit.convert(unit, self.value)?, *unit))
    }

    /// Converts into the statically known unit `U`.
    pub fn cast<U: Unit>(self) -> Result<Quantity<U>, UnitError> {
        Ok(Quantity::from(self.unit.convert(&U::DESCRIPTOR, self.value)?))
    }

    /// Expresses the quantity in its dimension's reference unit.
    pub fn normalize(self) -> Result<Self, UnitError> {
        self.convert(&self.unit.normalize())
    }

    pub fn compare(&self, rhs: &Self) -> Result<Option<Ordering>, UnitError> {
        Ok(self.value.partial_cmp(&rhs.convert(&self.unit)?.value))
    }

    pub fn indented(self, indent: usize) -> Indented<Self> {
        Indented::new(indent, self)
    }
}

impl<U: Unit> From<Quantity<U>> for DynQuantity {
    fn from(val: Quantity<U>) -> Self {
        val.erase()
    }
}

impl Display for DynQuantity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{:.2} {}", self.value, self.unit)
    }
}

impl Add<DynQuantity> for DynQuantity {
    type Output = Result<DynQuantity, UnitError>;
    fn add(self, rhs: DynQuantity) -> Result<DynQuantity, UnitError> {
        let rhs = rhs.convert(&self.unit)?;
        Ok(DynQuantity::new(self.value + rhs.value, self.unit))
    }
}

impl Sub<DynQuantity> for DynQuantity {
    type Output = Result<DynQuantity, UnitError>;
    fn sub(self, rhs: DynQuantity) -> Result<DynQuantity, UnitError> {
        let rhs = rhs.convert(&self.unit)?;
        Ok(DynQuantity::new(self.value - rhs.value, self.unit))
    }
}
