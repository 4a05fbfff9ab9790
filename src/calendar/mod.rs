pub mod category;
pub mod event;
pub mod filter;
pub mod store;

pub use category::{CategoryRegistry, HexColor};
pub use event::Event;
pub use filter::CategoryFilter;
pub use store::{DayEvents, EventStore};
