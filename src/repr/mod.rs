//! Concrete graph representations.

use crate::prelude::*;

mod neighborhood;
mod weighted;

pub use neighborhood::*;
pub use weighted::*;
