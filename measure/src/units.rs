/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::{Dimension, Ratio, Unit, UnitDescriptor};

macro_rules! define_unit {
    ($(#[$meta:meta])* $name:ident, $dim:ident, $scale:expr) => {
        define_unit!($(#[$meta])* $name, $dim, $scale, Ratio::ZERO);
    };
    ($(#[$meta:meta])* $name:ident, $dim:ident, $scale:expr, $offset:expr) => {
        $(#[$meta])*
        #[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
        pub struct $name;

        impl Unit for $name {
            const DIMENSION: Dimension = Dimension::$dim;
            const SCALE: Ratio = $scale;
            const OFFSET: Ratio = $offset;
        }
    };
}

/* Length, relative to the meter. */

define_unit!(Meters, Length, Ratio::integer(1));
define_unit!(Kilometers, Length, Ratio::integer(1000));
define_unit!(Centimeters, Length, Ratio::new(1, 100));
define_unit!(Millimeters, Length, Ratio::new(1, 1000));
define_unit!(
    /// Approximated as 1/40 m.
    Inches,
    Length,
    Ratio::new(1, 40)
);
define_unit!(
    /// Approximated as 3 m.
    Feet,
    Length,
    Ratio::integer(3)
);
define_unit!(
    /// Approximated as 1609 m.
    Miles,
    Length,
    Ratio::integer(1609)
);

/* Temperature, relative to the degree Celsius. */

define_unit!(Celsius, Temperature, Ratio::integer(1));
define_unit!(Fahrenheit, Temperature, Ratio::new(5, 9), Ratio::integer(32));

/* Time, relative to the minute. */

define_unit!(Minutes, Time, Ratio::integer(1));
define_unit!(Seconds, Time, Ratio::new(1, 60));
define_unit!(Milliseconds, Time, Ratio::new(1, 60 * 1000));
define_unit!(Microseconds, Time, Ratio::new(1, 60 * 1000 * 1000));
define_unit!(Hours, Time, Ratio::integer(60));
define_unit!(Days, Time, Ratio::integer(60 * 24));

/// Every unit defined above.
pub static UNITS: [UnitDescriptor; 15] = [
    Meters::DESCRIPTOR,
    Kilometers::DESCRIPTOR,
    Centimeters::DESCRIPTOR,
    Millimeters::DESCRIPTOR,
    Inches::DESCRIPTOR,
    Feet::DESCRIPTOR,
    Miles::DESCRIPTOR,
    Celsius::DESCRIPTOR,
    Fahrenheit::DESCRIPTOR,
    Minutes::DESCRIPTOR,
    Seconds::DESCRIPTOR,
    Milliseconds::DESCRIPTOR,
    Microseconds::DESCRIPTOR,
    Hours::DESCRIPTOR,
    Days::DESCRIPTOR,
];
