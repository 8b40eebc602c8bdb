//! Client for the remote AI transpiler service.
//!
//! The service compiles OpenQASM programs against a device's coupling map
//! and basis gates, optionally with AI-assisted routing and synthesis.
//! This crate only speaks the task protocol (submit, poll, fetch) and
//! parses results back into circuits; it contains no transpilation logic
//! of its own.
//!
//! [`ServiceClient`] implements the `TranspilerEngine` trait from
//! `quench-target`, so the benchmark harness drives it the same way it
//! drives a local stub in tests.

mod client;
mod error;

pub use client::{
    BASE_URL, ServiceClient, ServiceOptions, SubmitResponse, TaskResponse, TranspileRequest,
};
pub use error::{ServiceError, ServiceResult};
