//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation against stored data, uniqueness rules, state transitions
//! - **Orchestration**: Coordinating several repositories, such as confirm-time transactions
//! - **Domain Models**: Working with domain models rather than DTOs or raw documents

pub mod appointment;
pub mod auth;
pub mod client;
pub mod lock;
pub mod procedure;
pub mod report;
pub mod transaction;
