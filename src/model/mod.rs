//! Domain models and wire DTOs for member validation.

pub mod audit;
pub mod member;
pub mod validation;
