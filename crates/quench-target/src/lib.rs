//! Target device descriptions and the transpiler engine seam.
//!
//! A [`Target`] bundles what the benchmark suite knows about the device
//! it compiles against: the coupling [`Topology`], the native
//! [`BasisGates`], and the designated two-qubit gate whose count and
//! depth every benchmark record reports.
//!
//! The [`TranspilerEngine`] trait is the boundary between the harness and
//! whatever actually performs transpilation: in production the remote
//! service client in `quench-service`, in tests a local stub.

mod basis;
mod engine;
mod error;
mod target;
mod topology;

pub use basis::BasisGates;
pub use engine::TranspilerEngine;
pub use error::{EngineError, EngineResult, TargetError, TargetResult};
pub use target::Target;
pub use topology::Topology;
