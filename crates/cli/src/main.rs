use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use galaxy_model::prelude::*;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Galaxy spiral-arm model queries and geometry export")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify galactocentric (x, y) points against arms and spurs
    Classify {
        /// Comma-separated x coordinates (kpc)
        #[arg(long, short = 'x')]
        x: String,
        /// Comma-separated y coordinates (kpc)
        #[arg(long, short = 'y')]
        y: String,
        /// Log a human-readable line per point
        #[arg(long)]
        verbose: bool,
    },
    /// Export spines, polygon rings, spurs, and the bar as JSON
    Geometry {
        /// Output path; stdout when omitted
        #[arg(long)]
        out: Option<String>,
    },
    /// Render the model (delegated to external tools)
    Plot {
        #[arg(long)]
        interactive: bool,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Classify { x, y, verbose } => classify(&x, &y, verbose),
        Action::Geometry { out } => geometry(out),
        Action::Plot { interactive } => plot(interactive),
    }
}

fn parse_list(arg: &str, name: &str) -> Result<Vec<f64>> {
    arg.split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid {name} coordinate {s:?}"))
        })
        .collect()
}

fn classify(x: &str, y: &str, verbose: bool) -> Result<()> {
    let xs = parse_list(x, "x")?;
    let ys = parse_list(y, "y")?;
    if xs.len() != ys.len() {
        bail!("{} x coordinates but {} y coordinates", xs.len(), ys.len());
    }
    let gal = Galaxy::new();
    let categories = gal.classify(&xs, &ys, verbose);
    println!("{}", serde_json::to_string(&categories)?);
    Ok(())
}

/// Everything a renderer needs to reproduce the reference plot.
#[derive(Serialize)]
struct GeometryExport<'a> {
    arms: &'a [Arm],
    spurs: &'a [Spur],
    bar: &'a BarEllipse,
}

fn geometry(out: Option<String>) -> Result<()> {
    let gal = Galaxy::new();
    let export =
        GeometryExport { arms: gal.arms(), spurs: gal.spurs(), bar: gal.bar() };
    let json = serde_json::to_string_pretty(&export)?;
    match out {
        Some(path) => {
            if let Some(parent) = Path::new(&path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&path, json)?;
            tracing::info!(path, "geometry written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn plot(interactive: bool) -> Result<()> {
    if interactive {
        bail!("interactive mode is not yet implemented");
    }
    // Rendering is an external concern; point the caller at the data export.
    println!("plotting is delegated to external renderers; run `geometry` to export the model");
    Ok(())
}
