//! HTTP request handlers.
//!
//! Controllers extract procedure input, convert it into service parameters, call the
//! service, and wrap the resulting domain model as a DTO in the RPC result envelope.

pub mod bug;
pub mod health;
pub mod procedure;

#[cfg(test)]
mod test;
