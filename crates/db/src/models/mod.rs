//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Create/update input structs for inserts and partial updates
//!
//! For entities with domain validation rules (patients, appointments,
//! budgets, treatments, prescriptions) the insert/update inputs are the
//! validated DTOs from `clinica_core::dto`; repositories accept those
//! directly so unvalidated data cannot reach a query.

pub mod aesthetic_note;
pub mod appointment;
pub mod audit;
pub mod budget;
pub mod location;
pub mod notification;
pub mod patient;
pub mod prescription;
pub mod service;
pub mod session;
pub mod treatment;
pub mod user;
