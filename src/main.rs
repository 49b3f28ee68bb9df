// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
mod config;
mod instrument;
mod notes;
mod samples;
mod xml;

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{crate_version, Parser, Subcommand};
use tracing::info;

use crate::instrument::Instrument;

/// Default instrument name when neither a flag nor a metadata file
/// provides one.
const DEFAULT_NAME: &str = "My Instrument";

#[derive(Parser)]
#[clap(
    author = "Michael Wilson",
    version = crate_version!(),
    about = "A sampler instrument builder."
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Builds an instrument.sss file from a folder of samples.
    ///
    /// Samples must be named {Note}_{Velocity}_{RR}.wav, e.g. C3_033_01.wav,
    /// C#3_127_02.wav or Db3_064_01.wav.
    Build {
        /// The path to the folder containing the sample files.
        samples_dir: PathBuf,
        /// The instrument name.
        #[arg(short, long)]
        name: Option<String>,
        /// The author name.
        #[arg(short, long)]
        author: Option<String>,
        /// The output path for the instrument file.
        /// Defaults to <samples_dir>/../instrument.sss.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// A YAML file with instrument metadata. Explicit flags override it.
        #[arg(short, long)]
        meta: Option<PathBuf>,
    },
    /// Lists the zones that would be inferred, without writing anything.
    Scan {
        /// The path to the folder containing the sample files.
        samples_dir: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            samples_dir,
            name,
            author,
            output,
            meta,
        } => {
            let meta = match meta {
                Some(path) => config::parse_meta(&path)?,
                None => config::InstrumentMeta::default(),
            };
            let name = name
                .or(meta.name)
                .unwrap_or_else(|| DEFAULT_NAME.to_string());
            let author = author.or(meta.author).unwrap_or_default();

            let samples = samples::scan_samples(&samples_dir)?;
            info!(count = samples.len(), path = %samples_dir.display(), "Scanned samples");

            let instrument = Instrument::new(name, author, samples)?;

            let output = match output {
                Some(output) => output,
                None => default_output(&samples_dir)?,
            };
            fs::write(&output, xml::render(&instrument))?;

            println!("Generated: {}", output.display());
            println!("{}", instrument);
        }
        Commands::Scan { samples_dir } => {
            let samples = samples::scan_samples(&samples_dir)?;
            let instrument = Instrument::new(String::new(), String::new(), samples)?;

            println!("Zones (count: {}):", instrument.groups().len());
            for group in instrument.groups() {
                println!(
                    "- {}: keys {}..{}, velocity {}..{}, {} round robins",
                    group.label(),
                    group.note_range.0,
                    group.note_range.1,
                    group.vel_range.0,
                    group.vel_range.1,
                    group.samples.len()
                );
                for sample in &group.samples {
                    println!("    {}", sample.source.display());
                }
            }
        }
    }

    Ok(())
}

/// The default output path: instrument.sss in the parent of the samples
/// directory, so the file sits next to the samples folder it references.
fn default_output(samples_dir: &PathBuf) -> Result<PathBuf, Box<dyn Error>> {
    let resolved = samples_dir.canonicalize()?;
    Ok(match resolved.parent() {
        Some(parent) => parent.join("instrument.sss"),
        None => PathBuf::from("instrument.sss"),
    })
}
