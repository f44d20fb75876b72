//! Access probes.
//!
//! One endpoint per guard. Front-ends call them to decide which screens to
//! show; a 200 means the guard admits the caller.

pub mod controller;
pub mod router;

pub use controller::AccessResponse;
pub use router::init_access_router;
