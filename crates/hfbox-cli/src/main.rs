//! hfbox CLI - face points and edges for simulation boxes
//!
//! Reads a cell document and prints the coordinates boundary-assignment
//! scripts need.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hfbox_cli::{
    collect_anchors, find_box, load_boxes, periodic_pairs, render_anchors, render_anchors_json,
    render_edge, render_info, render_point,
};

#[derive(Parser)]
#[command(name = "hfbox")]
#[command(about = "Face points and edges of axis-aligned simulation boxes", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the boxes in a document with their normalized corner and size
    Info {
        /// Cell document (.toml or .json)
        file: PathBuf,
    },
    /// Print the center point of one face
    Point {
        /// Cell document (.toml or .json)
        file: PathBuf,
        /// Box name
        name: String,
        /// Face: left, right, up, down, front or rear
        direction: String,
    },
    /// Print the edge points P0, P1, P0, P2 of one face
    Edge {
        /// Cell document (.toml or .json)
        file: PathBuf,
        /// Box name
        name: String,
        /// Face: left, right, up, down, front or rear
        direction: String,
    },
    /// Print point and edges for every face
    Anchors {
        /// Cell document (.toml or .json)
        file: PathBuf,
        /// Only this box
        #[arg(short, long = "box")]
        name: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Print master/slave face pairs for periodic boundaries
    Periodic {
        /// Cell document (.toml or .json)
        file: PathBuf,
        /// Box name
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Info { file } => {
            print!("{}", render_info(&load_boxes(&file)?));
        }
        Commands::Point {
            file,
            name,
            direction,
        } => {
            let boxes = load_boxes(&file)?;
            println!("{}", render_point(find_box(&boxes, &name)?, &direction)?);
        }
        Commands::Edge {
            file,
            name,
            direction,
        } => {
            let boxes = load_boxes(&file)?;
            println!("{}", render_edge(find_box(&boxes, &name)?, &direction)?);
        }
        Commands::Anchors { file, name, json } => {
            let boxes = load_boxes(&file)?;
            let selected = match name {
                Some(name) => vec![find_box(&boxes, &name)?.clone()],
                None => boxes,
            };
            let anchors = collect_anchors(&selected);
            if json {
                println!("{}", render_anchors_json(&anchors)?);
            } else {
                print!("{}", render_anchors(&anchors));
            }
        }
        Commands::Periodic { file, name } => {
            let boxes = load_boxes(&file)?;
            for (master, slave) in periodic_pairs(find_box(&boxes, &name)?) {
                println!("master {} <-> slave {}", master.direction, slave.direction);
                print!("{}", render_anchors(&[master, slave]));
            }
        }
    }

    Ok(())
}
