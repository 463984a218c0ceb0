//! Display state derived from fetched data.
//!
//! Everything here is synchronous and side-effect free apart from the
//! liveness flags in [`ViewScope`].

mod home;
mod medications;
mod state;

pub use home::*;
pub use medications::*;
pub use state::*;
