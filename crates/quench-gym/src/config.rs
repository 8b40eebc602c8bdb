//! Process configuration for the benchmark gym.
//!
//! Initialized once at startup (YAML file plus environment overrides)
//! and shared read-only for the rest of the run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use quench_target::{BasisGates, Target, Topology};

use crate::error::GymResult;

/// Environment variable overriding the service URL.
pub const ENV_SERVICE_URL: &str = "QUENCH_SERVICE_URL";
/// Environment variable overriding the service token.
pub const ENV_SERVICE_TOKEN: &str = "QUENCH_SERVICE_TOKEN";

/// Top-level gym configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GymConfig {
    /// Target device the suite compiles against.
    pub target: TargetConfig,
    /// Suite layout and timing settings.
    pub suite: SuiteConfig,
    /// Remote transpiler service settings.
    pub service: ServiceConfig,
}

impl GymConfig {
    /// Load configuration from a YAML file and apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> GymResult<Self> {
        let source = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yaml_ng::from_str(&source)?;
        config.apply_env();
        Ok(config)
    }

    /// Apply `QUENCH_SERVICE_URL` / `QUENCH_SERVICE_TOKEN` overrides.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(ENV_SERVICE_URL) {
            self.service.url = Some(url);
        }
        if let Ok(token) = std::env::var(ENV_SERVICE_TOKEN) {
            self.service.token = Some(token);
        }
    }

    /// Directory holding the circuit files of a named family, e.g.
    /// `<qasm_root>/qft/`.
    pub fn qasm_dir(&self, family: &str) -> PathBuf {
        self.suite.qasm_root.join(family)
    }
}

/// Target device settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Device preset name (`heron`, `eagle`, `simulator`).
    pub preset: String,
    /// Number of physical qubits.
    pub num_qubits: u32,
    /// Explicit coupling edges; overrides the preset topology.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<(u32, u32)>>,
    /// Explicit basis gates; overrides the preset basis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basis_gates: Option<Vec<String>>,
    /// The two-qubit gate whose count/depth the records report;
    /// defaults to the first entangler in the basis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_qubit_gate: Option<String>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            preset: "heron".to_string(),
            num_qubits: 133,
            edges: None,
            basis_gates: None,
            two_qubit_gate: None,
        }
    }
}

impl TargetConfig {
    /// Build the [`Target`] this configuration describes.
    pub fn build(&self) -> GymResult<Target> {
        let mut target = match (&self.edges, &self.basis_gates) {
            (None, None) => Target::preset(&self.preset, self.num_qubits)?,
            (edges, basis) => {
                let topology = match edges {
                    Some(edges) => Topology::custom(self.num_qubits, edges.iter().copied())?,
                    None => Target::preset(&self.preset, self.num_qubits)?
                        .topology()
                        .clone(),
                };
                let basis = match basis {
                    Some(gates) => BasisGates::new(gates.iter().cloned()),
                    None => Target::preset(&self.preset, self.num_qubits)?.basis().clone(),
                };
                Target::new(self.preset.clone(), topology, basis)?
            }
        };
        if let Some(gate) = &self.two_qubit_gate {
            target = target.with_two_qubit_gate(gate.clone());
        }
        Ok(target)
    }
}

/// Suite layout and timing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Root directory of the circuit files, one subdirectory per family.
    pub qasm_root: PathBuf,
    /// Timed iterations per case. Each iteration is a full service round
    /// trip, so the default is a single measurement.
    pub iterations: u32,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            qasm_root: PathBuf::from("qasm"),
            iterations: 1,
        }
    }
}

/// Remote transpiler service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service base URL; `None` uses the client's default endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Bearer token. Never serialized back out.
    #[serde(skip_serializing)]
    pub token: Option<String>,
    /// Enable AI-assisted routing and synthesis.
    pub ai: bool,
    /// Optimization level (0-3).
    pub optimization_level: u8,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: None,
            token: None,
            ai: true,
            optimization_level: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GymConfig::default();
        assert_eq!(config.target.preset, "heron");
        assert_eq!(config.target.num_qubits, 133);
        assert_eq!(config.suite.iterations, 1);
        assert!(config.service.ai);
        assert_eq!(config.service.optimization_level, 3);
        assert_eq!(config.qasm_dir("qft"), PathBuf::from("qasm/qft"));
    }

    #[test]
    fn test_default_target_builds() {
        let target = GymConfig::default().target.build().unwrap();
        assert_eq!(target.num_qubits(), 133);
        assert_eq!(target.two_qubit_gate(), "cz");
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
target:
  preset: eagle
  num_qubits: 27
suite:
  qasm_root: /data/circuits
  iterations: 3
service:
  url: http://localhost:8080
  ai: false
  optimization_level: 1
"#;
        let config: GymConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.target.preset, "eagle");
        assert_eq!(config.target.num_qubits, 27);
        assert_eq!(config.suite.iterations, 3);
        assert_eq!(config.service.url.as_deref(), Some("http://localhost:8080"));
        assert!(!config.service.ai);
        assert_eq!(config.service.optimization_level, 1);

        let target = config.target.build().unwrap();
        assert_eq!(target.two_qubit_gate(), "ecr");
    }

    #[test]
    fn test_custom_edges_and_basis() {
        let yaml = r#"
target:
  preset: ring3
  num_qubits: 3
  edges: [[0, 1], [1, 2], [2, 0]]
  basis_gates: [rz, sx, x, cx]
"#;
        let config: GymConfig = serde_yaml_ng::from_str(yaml).unwrap();
        let target = config.target.build().unwrap();
        assert_eq!(target.topology().edges().len(), 3);
        assert_eq!(target.two_qubit_gate(), "cx");
    }

    #[test]
    fn test_two_qubit_gate_override() {
        let yaml = r#"
target:
  preset: heron
  num_qubits: 5
  two_qubit_gate: rzz
"#;
        let config: GymConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.target.build().unwrap().two_qubit_gate(), "rzz");
    }

    #[test]
    fn test_token_never_serialized() {
        let mut config = GymConfig::default();
        config.service.token = Some("secret".to_string());
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        assert!(!yaml.contains("secret"));
    }
}
