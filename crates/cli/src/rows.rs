//! Constraint-row files: one `a b c` (or `a b <= c`) per line.
//!
//! Numbers are integers, fractions `p/q`, or decimals; `#` starts a comment.

use anyhow::{Context, Result};
use lpregion::region::{Constraint, ConstraintSystem};
use std::fs;
use std::path::Path;

pub fn parse_rows(text: &str) -> Result<ConstraintSystem> {
    let mut rows = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let row: Constraint = line
            .parse()
            .with_context(|| format!("line {}: `{}`", idx + 1, line))?;
        rows.push(row);
    }
    Ok(ConstraintSystem::new(rows))
}

pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<ConstraintSystem> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_rows(&text).with_context(|| format!("parsing {}", path.display()))
}
