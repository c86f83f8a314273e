//! Access to the hosted league database
//!
//! - `query`: declarative read descriptions (`Select`)
//! - `http`: the REST client that executes them
//! - `types`: row shapes as the store returns them

pub mod http;
pub mod query;
pub mod types;

pub use http::StoreClient;
pub use query::{Cardinality, Order, Select};
