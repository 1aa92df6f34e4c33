//! Built-in rules.

mod no_for_of_set;
mod no_set_spread;

pub use no_for_of_set::NO_FOR_OF_SET;
pub use no_set_spread::NO_SET_SPREAD;
