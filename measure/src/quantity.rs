/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, Sub};

use serde::de::{Deserializer, Error};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::error::UnitError;
use super::{Dimension, DynQuantity, Magnitude, Ratio, Unit, UnitDescriptor};

/// A magnitude in the statically known unit `U`.
#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub struct Quantity<U: Unit>(f64, PhantomData<U>);

impl<U: Unit> Quantity<U> {
    pub fn new<M: Magnitude>(val: M) -> Self {
        Quantity(val.to_f64(), PhantomData)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn dimension(&self) -> Dimension {
        U::DIMENSION
    }

    pub fn scale(&self) -> Ratio {
        U::SCALE
    }

    pub fn offset(&self) -> Ratio {
        U::OFFSET
    }

    pub fn descriptor(&self) -> UnitDescriptor {
        U::DESCRIPTOR
    }

    pub fn suffix(&self) -> &'static str {
        U::suffix()
    }

    pub fn convert<T: Unit>(self) -> Result<Quantity<T>, UnitError> {
        unit_cast(self)
    }

    /* Note: we cannot implement PartialOrd, because it does not allow
    for error conditions. */
    pub fn compare<R: Unit>(
        &self,
        rhs: &Quantity<R>,
    ) -> Result<Option<Ordering>, UnitError> {
        Ok(self.0.partial_cmp(&unit_cast::<R, U>(*rhs)?.0))
    }

    /// Forgets the static unit, keeping its description.
    pub fn erase(self) -> DynQuantity {
        DynQuantity::new(self.0, U::DESCRIPTOR)
    }

    /// Display adapter prefixed with `indent` spaces.
    pub fn indented(self, indent: usize) -> Indented<Self> {
        Indented::new(indent, self)
    }
}

/// Converts `q` from unit `F` into unit `T`.
///
/// Fails with [`UnitError::IncompatibleDimension`] when the units have
/// different dimensions; no numeric work is done in that case.
pub fn unit_cast<F: Unit, T: Unit>(
    q: Quantity<F>,
) -> Result<Quantity<T>, UnitError> {
    let val = F::DESCRIPTOR.convert(&T::DESCRIPTOR, q.0)?;
    Ok(Quantity(val, PhantomData))
}

impl<U: Unit> From<f64> for Quantity<U> {
    fn from(val: f64) -> Self {
        Quantity(val, PhantomData)
    }
}

impl<U: Unit> Display for Quantity<U> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{:.2} {}", self.0, U::suffix())
    }
}

/// Prefixes a displayed value with a fixed number of spaces.
#[derive(Clone, Copy, Debug)]
pub struct Indented<T>(usize, T);

impl<T> Indented<T> {
    pub(crate) fn new(indent: usize, inner: T) -> Self {
        Indented(indent, inner)
    }
}

impl<T: Display> Display for Indented<T> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{:indent$}{}", "", self.1, indent = self.0)
    }
}

impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        self.erase().serialize(serializer)
    }
}

impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        DynQuantity::deserialize(deserializer)?
            .cast()
            .map_err(D::Error::custom)
    }
}

/* The result is expressed in the left operand's unit. */

impl<L: Unit, R: Unit> Add<Quantity<R>> for Quantity<L> {
    type Output = Result<Quantity<L>, UnitError>;
    fn add(self, rhs: Quantity<R>) -> Result<Quantity<L>, UnitError> {
        let rhs = unit_cast::<R, L>(rhs)?;
        Ok(Quantity(self.0 + rhs.0, PhantomData))
    }
}

impl<L: Unit, R: Unit> Sub<Quantity<R>> for Quantity<L> {
    type Output = Result<Quantity<L>, UnitError>;
    fn sub(self, rhs: Quantity<R>) -> Result<Quantity<L>, UnitError> {
        let rhs = unit_cast::<R, L>(rhs)?;
        Ok(Quantity(self.0 - rhs.0, PhantomData))
    }
}
