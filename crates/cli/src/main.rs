use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gridgeom::api::{ProbeMode, ReplayToken};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod commands;
mod provenance;
mod scene;

use provenance::Payload;
use scene::Scene;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Run grid geometry computations on a JSON scene")]
struct Cmd {
    /// Write the result here (plus a provenance sidecar) instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Log filter, e.g. `info` or `gridgeom=trace` (logs go to stderr)
    #[arg(long, global = true, default_value = "info")]
    log: String,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of the scene's points
    Hull {
        #[arg(long)]
        input: PathBuf,
    },
    /// Area, perimeter, and shape name of each polygon
    Area {
        #[arg(long)]
        input: PathBuf,
    },
    /// Self- and pairwise-intersection status of each polygon (advisory)
    Validate {
        #[arg(long)]
        input: PathBuf,
    },
    /// Containment tree of the scene's polygons
    Tree {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Probe::FirstVertex)]
        probe: Probe,
    },
    /// Area covered by the union of the scene's rectangles
    UnionArea {
        #[arg(long)]
        input: PathBuf,
    },
    /// Emit a reproducible random scene
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Probe {
    FirstVertex,
    AllVertices,
}

impl From<Probe> for ProbeMode {
    fn from(p: Probe) -> Self {
        match p {
            Probe::FirstVertex => ProbeMode::FirstVertex,
            Probe::AllVertices => ProbeMode::AllVertices,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let filter = EnvFilter::try_new(&cmd.log).with_context(|| format!("bad --log filter {:?}", cmd.log))?;
    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let out = cmd.out.as_deref();
    match cmd.action {
        Action::Hull { input } => run(&input, out, "hull", json!({}), commands::hull),
        Action::Area { input } => run(&input, out, "area", json!({}), commands::area),
        Action::Validate { input } => run(&input, out, "validate", json!({}), commands::validate),
        Action::Tree { input, probe } => {
            let mode = ProbeMode::from(probe);
            run(&input, out, "tree", json!({ "probe": mode }), |s| {
                commands::tree(s, mode)
            })
        }
        Action::UnionArea { input } => {
            run(&input, out, "union-area", json!({}), commands::union_area)
        }
        Action::Sample { seed, index } => {
            tracing::info!(seed, index, "sample");
            let scene = commands::sample(ReplayToken::new(seed, index));
            let params = json!({ "seed": seed, "index": index });
            emit(&serde_json::to_value(&scene)?, out, Payload::new("sample", params))
        }
        Action::Report => report(),
    }
}

fn run(
    input: &Path,
    out: Option<&Path>,
    command: &'static str,
    mut params: Value,
    body: impl FnOnce(&Scene) -> Value,
) -> Result<()> {
    tracing::info!(command, input = %input.display(), "run");
    let scene = Scene::load(input)?;
    let doc = body(&scene);
    params["input"] = json!(input.to_string_lossy());
    emit(&doc, out, Payload::new(command, params))
}

/// Print `doc` to stdout, or write it to `out` with a provenance sidecar.
fn emit(doc: &Value, out: Option<&Path>, payload: Payload) -> Result<()> {
    let Some(out_path) = out else {
        println!("{}", serde_json::to_string_pretty(doc)?);
        return Ok(());
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out_path.display()))?;
    let prov = provenance::write_sidecar(out_path, payload)?;
    tracing::info!(out = %out_path.display(), provenance = %prov.display(), "written");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "engine": gridgeom::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
