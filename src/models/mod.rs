pub mod entry;

pub use entry::{CityEntry, NewEntry};
