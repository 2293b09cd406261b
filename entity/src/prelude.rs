pub use super::bug::Entity as Bug;
