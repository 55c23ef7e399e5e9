//! Seat allocation for a single flight.
//!
//! Passengers travel alone or in families. [`assignment::form_units`] turns
//! them into indivisible units (a family is never split) and
//! [`optimizer::select_optimal`] picks the units that maximise ticket revenue
//! without exceeding the seat capacity.

pub mod assignment;
pub mod error;
pub mod family;
pub mod generator;
pub mod model;
pub mod optimizer;
pub mod report;

pub use assignment::{flatten_units, form_units};
pub use error::{FamilyError, FormationError, GenerateError};
pub use model::entity::{Passenger, PassengerKind};
pub use model::family::Family;
pub use model::unit::{AllocationUnit, Cost, Seats, Selection};
pub use optimizer::select_optimal;
