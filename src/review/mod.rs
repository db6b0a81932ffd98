pub mod loader;
pub mod model;
pub mod store;

pub use model::Review;
pub use store::{AppFilter, ReviewStore, StoreEvent};
