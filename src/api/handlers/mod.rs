//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod lookup;
pub mod proxy;
pub mod resolve;

pub use health::health_handler;
pub use lookup::lookup_handler;
pub use proxy::proxy_handler;
pub use resolve::{resolve_handler, resolve_local_handler};
pub use self_test::self_test_handler;
