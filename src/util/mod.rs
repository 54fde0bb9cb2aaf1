pub mod zero;

pub use zero::{Zeroed, is_all_zeros};
