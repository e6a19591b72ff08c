/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dimension::Dimension;

#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Copy, Debug)]
pub enum UnitError {
    #[error(
        "incompatible dimensions: {from} <-> {to} \
         (only units of the same dimension can be converted)"
    )]
    IncompatibleDimension { from: Dimension, to: Dimension },
}
