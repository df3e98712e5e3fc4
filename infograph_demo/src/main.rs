// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders infograph chart payloads to SVG.

mod samples;
mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use infograph_payload::{ChartKind, ChartPayload, render};

#[derive(Debug, Parser)]
#[command(
    name = "infograph_demo",
    version,
    about = "Render chart payloads (JSON) to SVG",
    after_help = "Examples:
  infograph_demo sales.json --kind donut               Write SVG to stdout
  infograph_demo sales.json --kind funnel -o out.svg   Write SVG to a file
  infograph_demo --samples target/samples              Render every built-in sample"
)]
struct Args {
    /// Payload file to render.
    #[arg(required_unless_present = "samples", conflicts_with = "samples")]
    payload: Option<PathBuf>,

    /// Chart family: radial_bar, radial_bar_compact, gauge, pyramid, funnel, treemap, donut.
    #[arg(short, long, default_value = "donut")]
    kind: ChartKind,

    /// Output file (stdout when omitted).
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Render every built-in sample into DIR, one SVG per chart family.
    #[arg(long, value_name = "DIR")]
    samples: Option<PathBuf>,

    /// More logging (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Some(dir) = &args.samples {
        return render_samples(dir);
    }
    let Some(path) = &args.payload else {
        bail!("a payload file is required without --samples");
    };

    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let payload = ChartPayload::from_slice(&bytes)
        .with_context(|| format!("parsing {}", path.display()))?;
    let scene = render(&payload, args.kind)
        .with_context(|| format!("rendering {} as {}", path.display(), args.kind))?;
    let svg = svg::scene_to_svg(&scene);

    match &args.out {
        Some(out) => {
            fs::write(out, svg).with_context(|| format!("writing {}", out.display()))?;
            log::info!("wrote {}", out.display());
        }
        None => print!("{svg}"),
    }
    Ok(())
}

fn render_samples(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    for kind in ChartKind::ALL {
        let payload = samples::sample(kind)?;
        let scene = render(&payload, kind).with_context(|| format!("rendering the {kind} sample"))?;
        let out = dir.join(format!("{kind}.svg"));
        fs::write(&out, svg::scene_to_svg(&scene))
            .with_context(|| format!("writing {}", out.display()))?;
        println!("wrote {}", out.display());
    }
    Ok(())
}
