//! Business services sitting between handlers and the repositories.
//!
//! Services own validation and output sanitization; persistence is reached
//! only through the store traits so each service can run against an
//! in-memory fake in tests.

pub mod car;
pub mod people;

pub use car::{CarService, UpdateMode};
pub use people::PeopleService;
