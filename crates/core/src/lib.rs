//! Functional core for oidc_gate.
//!
//! Everything here is pure: error values, the kind-to-response mapping and the
//! traits that describe the external collaborators. No HTTP framework types.

pub mod auth;
