//! Application Layer
//!
//! Contains use cases that orchestrate business logic, plus the services they share.
//! Both depend on domain gateways (abstractions), not concrete implementations.

pub mod services;
pub mod use_cases;
