use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lpregion::region::{feasible_region, FeasTest, RegionCfg};
use std::fs;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;
mod rows;
mod summary;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Feasible-region geometry for two-variable linear programs")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the feasible region of a row file and print its ordered boundary
    Region {
        /// One `a b c` row per line, meaning `a·x + b·y <= c`
        #[arg(long)]
        input: String,
        /// Test feasibility in double precision with this slack (default: single precision)
        #[arg(long)]
        eps: Option<f64>,
        /// Also write the output to this file, with a provenance sidecar
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

/// `RUST_LOG` when set and valid, otherwise `info`.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Region { input, eps, out } => region(input, eps, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn region(
    input: String,
    eps: Option<f64>,
    out: Option<String>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input, eps = ?eps, out = ?out, tag = ?tag, "region");
    let system = rows::read_rows(&input)?;
    let cfg = RegionCfg {
        feasibility: eps.map_or(FeasTest::Single, FeasTest::Eps),
    };
    let (normalized, region) = feasible_region(&system, cfg);
    tracing::info!(
        rows = system.len(),
        vertices = region.vertices.len(),
        markers = region.markers.len(),
        bounded = region.is_bounded(),
        "region_computed"
    );
    if region.is_empty() {
        tracing::warn!("feasible region is empty");
    }

    let text = summary::render_text(&normalized, &region);
    print!("{text}");

    if let Some(out) = out {
        let out_path = Path::new(&out);
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(out_path, &text).with_context(|| format!("writing {out}"))?;
        let run = provenance::RegionRun {
            input: &input,
            feasibility: match cfg.feasibility {
                FeasTest::Single => "single".to_string(),
                FeasTest::Eps(e) => format!("eps={e}"),
            },
            rows: system.len(),
            vertices: region.vertices.len(),
            markers: region.markers.len(),
            bounded: region.is_bounded(),
        };
        let payload = provenance::Payload::new(serde_json::to_value(&run)?).with_tag(tag);
        let prov = provenance::write_sidecar(out_path, payload)?;
        tracing::info!(provenance = %prov.display(), "wrote");
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = provenance::Payload::new(serde_json::json!({})).with_tag(tag);
    let doc = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
