//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the salon: clients, the procedure
//! catalogue, appointment booking and lifecycle, the revenue and expense ledger,
//! reports and account registration. The backend uses Axum as the web framework and
//! persists every collection through a pluggable record store (JSON files, SQLite via
//! SeaORM, or memory).
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, lifecycle transitions and reports
//! - **Data Layer** (`data/`) - Record stores and typed repositories over them
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Utilities** (`util/`) - Date periods, input parsing and password hashing
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared record store and transition lock
//! - **Startup** (`startup`) - Store selection, database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** converts DTOs to params, calls service
//! 3. **Service** applies business rules and calls repositories
//! 4. **Data** reads and writes documents, converts them to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
