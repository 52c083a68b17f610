//! Data Transfer Objects for API requests and responses.
//!
//! Query DTOs are validated with `validator`; response DTOs serialize with Serde.

pub mod health;
pub mod lookup;
pub mod resolve;
