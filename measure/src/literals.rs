/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Short constructors, one per unit: `km(5)`, `celsius(21.5)`, ...

use crate::units::{
    Celsius, Centimeters, Days, Fahrenheit, Feet, Hours, Inches, Kilometers,
    Meters, Microseconds, Miles, Milliseconds, Millimeters, Minutes, Seconds,
};
use crate::{Magnitude, Quantity};

macro_rules! unit_literal {
    ($($name:ident => $unit:ident),+ $(,)?) => {
        $(
            pub fn $name<M: Magnitude>(val: M) -> Quantity<$unit> {
                Quantity::new(val)
            }
        )+
    };
}

unit_literal!(
    m => Meters,
    km => Kilometers,
    cm => Centimeters,
    mm => Millimeters,
    inches => Inches,
    ft => Feet,
    mi => Miles,
    celsius => Celsius,
    fahrenheit => Fahrenheit,
    min => Minutes,
    s => Seconds,
    ms => Milliseconds,
    us => Microseconds,
    h => Hours,
    day => Days,
);
