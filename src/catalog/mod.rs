//! Vehicle price list and quote export

mod data;
pub mod loader;

pub use data::{Vehicle, VehicleQuotes};
pub use loader::{load_vehicles, load_vehicles_from_reader, write_quotes_csv};
