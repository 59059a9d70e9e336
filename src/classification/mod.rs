//! Implements CPT-based soil classification charts and their comparison

mod classifier;
mod comparator;
mod robertson1990;
mod robertson2009;
mod sbt_zone;
mod schneider2008;
pub use crate::classification::classifier::*;
pub use crate::classification::comparator::*;
pub use crate::classification::robertson1990::*;
pub use crate::classification::robertson2009::*;
pub use crate::classification::sbt_zone::*;
pub use crate::classification::schneider2008::*;
