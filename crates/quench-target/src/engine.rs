//! The transpiler engine seam.

use async_trait::async_trait;

use quench_ir::Circuit;

use crate::error::EngineResult;

/// A transpilation engine the benchmark harness can drive.
///
/// All transpilation intelligence (routing, layout, basis translation,
/// optimization) lives behind this trait. The harness only times the
/// call and reads metrics off the result. Implementations are expected
/// to be constructed once with their device constraints and shared
/// read-only across cases, hence `Send + Sync`.
#[async_trait]
pub trait TranspilerEngine: Send + Sync {
    /// Human-readable engine name, for logs and records.
    fn name(&self) -> &str;

    /// Compile `circuit` for the engine's configured target.
    ///
    /// Errors propagate unmodified to the caller; the harness performs
    /// no retries.
    async fn transpile(&self, circuit: &Circuit) -> EngineResult<Circuit>;
}
