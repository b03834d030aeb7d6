// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs;
use std::path::Path;
use std::process;

extern crate clap;
extern crate image;

use clap::{value_t, App, Arg, ArgMatches};
use log::{error, info, LevelFilter};
use seamcarve::convert::{from_image, to_rgb_image};
use seamcarve::dump::field_to_image;
use seamcarve::{
    carve_sequence, carve_to_width, compute_energy, cumulative_cost, mark_seam, CarveError,
    Image, Pixel, Result,
};

const SEAM_COLOR: Pixel = Pixel::new(1.0, 0.0, 0.0);

fn app() -> App<'static, 'static> {
    App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image narrowing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .help("Carve down to this many columns")
                .short("w")
                .long("width")
                .takes_value(true)
                .required_unless("remove")
                .conflicts_with("remove"),
        )
        .arg(
            Arg::with_name("remove")
                .help("Carve this many seams")
                .short("r")
                .long("remove")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("frames")
                .help("Write every intermediate image into this directory")
                .long("frames")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy")
                .help("Write the input's energy field as a grayscale image")
                .long("energy")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("cost")
                .help("Write the input's cumulative cost table as a grayscale image")
                .long("cost")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("mark-seam")
                .help("Write the input with its first seam drawn in red")
                .long("mark-seam")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .help("More logging; repeat for more")
                .short("v")
                .multiple(true),
        )
}

fn init_logging(verbosity: u64) {
    env_logger::Builder::from_default_env()
        .filter_level(match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();
}

// The diagnostics are all about the input image, before any carving.
fn write_diagnostics(matches: &ArgMatches, image: &Image) -> Result<()> {
    let wanted = ["energy", "cost", "mark-seam"];
    if !wanted.iter().any(|name| matches.is_present(name)) {
        return Ok(());
    }
    let energy = compute_energy(image)?;
    if let Some(path) = matches.value_of("energy") {
        field_to_image(&energy).save(path)?;
        info!("energy written to {}", path);
    }

    let cost = cumulative_cost(&energy)?;
    if let Some(path) = matches.value_of("cost") {
        field_to_image(&cost.costs()).save(path)?;
        info!("cumulative cost written to {}", path);
    }
    if let Some(path) = matches.value_of("mark-seam") {
        let marked = mark_seam(image, &cost.seam(), SEAM_COLOR)?;
        to_rgb_image(&marked).save(path)?;
        info!("first seam ({} total energy) written to {}", cost.seam_energy(), path);
    }
    Ok(())
}

fn write_frames(dir: &Path, frames: &[Image]) -> Result<()> {
    fs::create_dir_all(dir)?;
    for (n, frame) in frames.iter().enumerate() {
        to_rgb_image(frame).save(dir.join(format!("frame_{:04}.png", n + 1)))?;
    }
    info!("{} frames written to {}", frames.len(), dir.display());
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<()> {
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let image = from_image(&image::open(input)?)?;
    let width = image.width();
    info!("{}: {}x{}", input, width, image.height());

    // Both ways of asking are range checked before anything is
    // computed.
    let count = if matches.is_present("remove") {
        value_t!(matches, "remove", u32).unwrap_or_else(|e| e.exit())
    } else {
        let target = value_t!(matches, "width", u32).unwrap_or_else(|e| e.exit());
        if target > width {
            return Err(CarveError::InvalidParameter {
                name: "target width",
                value: target,
                width,
            });
        }
        width - target
    };
    if count > width {
        return Err(CarveError::InvalidParameter {
            name: "removal count",
            value: count,
            width,
        });
    }

    write_diagnostics(matches, &image)?;

    let carved = match matches.value_of("frames") {
        Some(dir) => {
            let frames = carve_sequence(&image, count)?;
            write_frames(Path::new(dir), &frames)?;
            frames.into_iter().last().unwrap_or(image)
        }
        None => carve_to_width(&image, width - count)?,
    };

    to_rgb_image(&carved).save(output)?;
    info!("{}: {}x{}", output, carved.width(), carved.height());
    Ok(())
}

fn main() {
    let matches = app().get_matches();
    init_logging(matches.occurrences_of("verbose"));

    if let Err(e) = run(&matches) {
        error!("{}", e);
        process::exit(1);
    }
}
