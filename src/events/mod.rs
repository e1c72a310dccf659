pub mod engage;
pub mod track;

pub use engage::{Update, UpdateTimestamp};
pub use track::{Event, Properties};
