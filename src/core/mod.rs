pub mod controller;
pub mod log;
pub mod timer;
pub mod view;

pub use controller::{Controller, SavedEntry};
pub use timer::{Stopwatch, TimerState};
pub use view::View;
