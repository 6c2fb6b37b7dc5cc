use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata used to generate a provenance sidecar.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params, tag: None }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

/// Parameters and headline counts of a `region` run.
#[derive(Debug, Serialize)]
pub struct RegionRun<'a> {
    pub input: &'a str,
    pub feasibility: String,
    pub rows: usize,
    pub vertices: usize,
    pub markers: usize,
    pub bounded: bool,
}

/// Provenance document: code revision, engine version, tag, params, outputs.
#[track_caller]
pub fn document(payload: &Payload, outputs: &[String]) -> Value {
    let callsite = Location::caller();
    json!({
        "code_rev": current_git_rev(),
        "engine": lpregion::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "tag": payload.tag,
        "params": payload.params,
        "outputs": outputs
    })
}

/// Write `<artifact>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = document(&payload, &[artifact.to_string_lossy().into_owned()]);
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
