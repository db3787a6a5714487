//! Main Program for Pixveil
//! Run with `--help` for more instruction

// Copyright (C) 2026 pixveil developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod error;
mod permute;
mod transform;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Error;
use clap::{Args, Parser, Subcommand};
use image::io::Reader as ImageReader;
use image::{Rgba, RgbaImage};

use crate::error::TransformError;
use crate::transform::{decode, encode, PixelOp, TransformConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Image obfuscation via pixel manipulation (NOT secure)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt/obfuscate image
    Encrypt(JobArgs),

    /// Decrypt/de-obfuscate image
    Decrypt(JobArgs),
}

#[derive(Args, Debug)]
struct JobArgs {
    /// Input image path
    input: PathBuf,

    /// Output image path
    output: PathBuf,

    /// Per-pixel operation to apply to RGB channels (xor, add or sub)
    #[arg(long)]
    op: Option<PixelOp>,

    /// Integer key (0-255)
    #[arg(long)]
    key: Option<u8>,

    /// Deterministic shuffle seed (enables pixel shuffling)
    #[arg(long)]
    shuffle_seed: Option<u64>,
}

fn main() -> Result<(), Error> {
    match Cli::parse().command {
        Command::Encrypt(job) => run(job, encode),
        Command::Decrypt(job) => run(job, decode),
    }
}

type Transform = fn(Vec<Rgba<u8>>, &TransformConfig) -> Result<Vec<Rgba<u8>>, TransformError>;

fn run(job: JobArgs, transform: Transform) -> Result<(), Error> {
    let config = TransformConfig {
        op: job.op,
        key: job.key,
        shuffle_seed: job.shuffle_seed,
    };

    // Convert to RGBA so all source modes are handled consistently.
    let im = ImageReader::new(BufReader::new(File::open(&job.input)?))
        .with_guessed_format()?
        .decode()?
        .into_rgba8();
    let (width, height) = im.dimensions();

    let pixels: Vec<Rgba<u8>> = im.pixels().copied().collect();
    let pixels = transform(pixels, &config)?;

    let raw: Vec<u8> = pixels.iter().flat_map(|px| px.0).collect();
    let out = RgbaImage::from_raw(width, height, raw)
        .expect("Transform should preserve pixel count");
    out.save(&job.output)?;

    println!("Saved: {}", job.output.display());

    Ok(())
}
