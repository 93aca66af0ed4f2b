mod add;
pub(crate) mod common;
mod sub;

pub use add::{Addition, DecimalAdd};
pub use sub::Subtraction;
