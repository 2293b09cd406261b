//! RPC backend and business logic.
//!
//! This module contains the complete backend: the procedure endpoints, input
//! validation, business logic, data access, and infrastructure. The backend uses Axum as
//! the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - Procedure handlers, namespace routing, and DTO conversion
//! - **Validation** (`validation`) - Schema checks on procedure payloads
//! - **Service Layer** (`service/`) - Operation preconditions and data-store error translation
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - CORS handling around the whole application
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection, migrations, seeding, and shutdown
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** matches `/v1/trpc/<namespace>.<procedure>` to a controller
//! 2. **Controller** extracts the payload and validates it into a parameter model
//! 3. **Service** checks preconditions and calls the repository
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO in the result envelope
//! 6. Any `AppError` on the way is rendered as an error envelope with its status code

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod validation;
