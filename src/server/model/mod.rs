//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are built from
//! validated procedure input and carry exactly what a service operation needs.

pub mod bug;
