pub mod colors;
pub mod date;
pub mod path;
pub mod table;
pub mod time;

pub use time::{clock_to_decimal, decimal_to_clock};
