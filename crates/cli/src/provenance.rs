//! `<stem>.provenance.json` sidecars written next to every packing result.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// What produced an artifact.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: impl AsRef<Path>) -> Self {
        self.inputs.push(input.as_ref().display().to_string());
        self
    }
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    convack_version: &'static str,
    params: &'a Value,
    inputs: &'a [String],
    output: String,
}

/// Writes the sidecar for `artifact` (next to it) and returns its path.
pub fn write_sidecar(artifact: &Path, payload: Payload) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let doc = Sidecar {
        code_rev: code_rev(),
        convack_version: convack::VERSION,
        params: &payload.params,
        inputs: &payload.inputs,
        output: artifact.display().to_string(),
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `placed.json` -> `placed.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "packing".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Revision stamped by the build (`GIT_COMMIT`), else `"unknown"`.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|rev| !rev.is_empty())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_output() {
        let derived = sidecar_path(Path::new("/tmp/out/placed.json"));
        assert_eq!(derived, Path::new("/tmp/out/placed.provenance.json"));
    }

    #[test]
    fn sidecar_records_params_and_io() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("placed.json");
        let payload = Payload::new(json!({"beam_width": 3})).with_input("polys.json");
        let sidecar = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(parsed["params"]["beam_width"], 3);
        assert_eq!(parsed["inputs"][0], "polys.json");
        assert_eq!(parsed["output"], artifact.display().to_string());
        assert_eq!(parsed["convack_version"], convack::VERSION);
        assert!(parsed["code_rev"].is_string());
    }
}
