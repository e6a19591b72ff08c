/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod descriptor;
pub mod dimension;
pub mod dyn_quantity;
pub mod error;
pub mod literals;
pub mod magnitude;
pub mod quantity;
pub mod ratio;
pub mod suffix;
pub mod unit;
pub mod units;

pub use descriptor::UnitDescriptor;
pub use dimension::Dimension;
pub use dyn_quantity::DynQuantity;
pub use error::UnitError;
pub use magnitude::Magnitude;
pub use quantity::{unit_cast, Indented, Quantity};
pub use ratio::{Factor, Ratio};
pub use unit::Unit;

pub use units::{
    Celsius, Centimeters, Days, Fahrenheit, Feet, Hours, Inches, Kilometers,
    Meters, Microseconds, Miles, Milliseconds, Millimeters, Minutes, Seconds,
};
