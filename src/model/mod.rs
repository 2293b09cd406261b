//! Wire-level DTOs shared with API consumers.
//!
//! These types define the JSON shapes exchanged over the RPC transport and are
//! annotated with `utoipa` so they appear in the generated OpenAPI document.

pub mod api;
pub mod bug;
