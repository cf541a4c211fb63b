pub mod elapsed;
pub mod record;
