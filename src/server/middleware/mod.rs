//! Request/response middleware applied around the whole router.

pub mod cors;
