/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::{Dimension, Ratio};

/// Label for (dimension, scale) combinations missing from the table.
pub const UNKNOWN_SUFFIX: &str = "<unit>";

/// Display labels, keyed by dimension and scale. The offset does not
/// take part in the lookup.
pub static SUFFIXES: [(Dimension, Ratio, &str); 15] = [
    (Dimension::Length, Ratio::integer(1), "m"),
    (Dimension::Length, Ratio::integer(1000), "km"),
    (Dimension::Length, Ratio::new(1, 100), "cm"),
    (Dimension::Length, Ratio::new(1, 1000), "mm"),
    (Dimension::Length, Ratio::new(1, 40), "in"),
    (Dimension::Length, Ratio::integer(3), "ft"),
    (Dimension::Length, Ratio::integer(1609), "mi"),
    (Dimension::Temperature, Ratio::integer(1), "°C"),
    (Dimension::Temperature, Ratio::new(5, 9), "°F"),
    (Dimension::Time, Ratio::integer(1), "min"),
    (Dimension::Time, Ratio::new(1, 60 * 1000), "ms"),
    (Dimension::Time, Ratio::new(1, 60 * 1000 * 1000), "µs"),
    (Dimension::Time, Ratio::new(1, 60), "s"),
    (Dimension::Time, Ratio::integer(60), "hs"),
    (Dimension::Time, Ratio::integer(60 * 24), "d"),
];

pub fn suffix(dimension: Dimension, scale: Ratio) -> &'static str {
    SUFFIXES
        .iter()
        .find(|(d, s, _)| *d == dimension && *s == scale)
        .map_or(UNKNOWN_SUFFIX, |(_, _, label)| *label)
}
