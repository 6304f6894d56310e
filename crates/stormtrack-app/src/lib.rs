//! stormtrack-app — the state owner and load driver.
//!
//! [`Controller`] holds every mutable piece of state and [`Loader`] feeds it
//! finished loads from background tasks. [`RenderFrame`] is the read side.

pub mod controller;
pub mod loader;
pub mod render;

pub use controller::{Applied, Controller, LoadOutcome, LoadTicket, Payload};
pub use loader::{load_all, load_year, Loader};
pub use render::{Marker, RenderFrame};
