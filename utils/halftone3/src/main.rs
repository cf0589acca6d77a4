// halftone/utils/halftone3/src/main.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Applies a "Halftone 3" screen to a PNG image.

#[macro_use]
extern crate log;

mod preset;

use crate::preset::Preset;
use anyhow::{anyhow, bail, Context, Result};
use clap::{App, Arg, ArgMatches};
use halftone_content::{Halftone3, ParamValue};
use halftone_geometry::transform2d::Transform2F;
use halftone_geometry::vector::Vector2F;
use halftone_renderer::options::DEFAULT_PIXELS_PER_UNIT;
use halftone_renderer::{BuildHalftoneTask, ExecutorKind, RenderOptions, Surface};
use image::RgbaImage;
use std::path::PathBuf;
use std::time::Instant;

struct Options {
    input_path: PathBuf,
    output_path: PathBuf,
    preset: Preset,
    size: Option<Vector2F>,
    mask_type: Option<String>,
    additive: bool,
    amount: Option<f32>,
    blend_method: Option<String>,
    render: RenderOptions,
}

impl Options {
    fn app() -> App<'static, 'static> {
        App::new("halftone3")
            .about("Simulates a three-color halftone print of a PNG image")
            .arg(
                Arg::with_name("preset")
                    .short("p")
                    .long("preset")
                    .value_name("FILE")
                    .takes_value(true)
                    .help("JSON preset to start from"),
            )
            .arg(
                Arg::with_name("size")
                    .short("s")
                    .long("size")
                    .value_name("SIZE")
                    .takes_value(true)
                    .help("Screen cell size in units, as `S` or `W,H`"),
            )
            .arg(
                Arg::with_name("type")
                    .short("t")
                    .long("type")
                    .value_name("TYPE")
                    .takes_value(true)
                    .possible_values(&["symmetric", "lightondark", "diamond", "stripe"])
                    .help("Dot shape"),
            )
            .arg(
                Arg::with_name("additive")
                    .long("additive")
                    .help("Combine red, green and blue lights instead of inks"),
            )
            .arg(
                Arg::with_name("amount")
                    .short("a")
                    .long("amount")
                    .value_name("AMOUNT")
                    .takes_value(true)
                    .help("Opacity of the halftoned result"),
            )
            .arg(
                Arg::with_name("blend")
                    .short("b")
                    .long("blend")
                    .value_name("METHOD")
                    .takes_value(true)
                    .help("Blend method, such as `straight` or `multiply`"),
            )
            .arg(
                Arg::with_name("scale")
                    .long("scale")
                    .value_name("PIXELS_PER_UNIT")
                    .takes_value(true)
                    .help("Image pixels per unit [default: 60]"),
            )
            .arg(
                Arg::with_name("jobs")
                    .short("j")
                    .long("jobs")
                    .value_name("THREADS")
                    .takes_value(true)
                    .help("Number of threads to use"),
            )
            .arg(
                Arg::with_name("sequential")
                    .long("sequential")
                    .help("Render on a single thread"),
            )
            .arg(
                Arg::with_name("list-params")
                    .long("list-params")
                    .help("Print the layer parameters and exit"),
            )
            .arg(
                Arg::with_name("INPUT")
                    .help("Path to the PNG image to read")
                    .required_unless("list-params")
                    .index(1),
            )
            .arg(
                Arg::with_name("OUTPUT")
                    .help("Path to the PNG image to write")
                    .required_unless("list-params")
                    .index(2),
            )
    }

    fn from_matches(matches: &ArgMatches) -> Result<Options> {
        let preset = match matches.value_of("preset") {
            Some(path) => Preset::load(&PathBuf::from(path))?,
            None => Preset::default(),
        };
        let size = matches.value_of("size").map(parse_size).transpose()?;
        let amount = parse_value::<f32>(matches, "amount")?;
        let jobs = parse_value::<usize>(matches, "jobs")?;
        let pixels_per_unit =
            parse_value::<f32>(matches, "scale")?.unwrap_or(DEFAULT_PIXELS_PER_UNIT);
        let executor = if matches.is_present("sequential") {
            ExecutorKind::Sequential
        } else {
            ExecutorKind::Rayon
        };

        Ok(Options {
            input_path: PathBuf::from(matches.value_of("INPUT").unwrap_or_default()),
            output_path: PathBuf::from(matches.value_of("OUTPUT").unwrap_or_default()),
            preset,
            size,
            mask_type: matches.value_of("type").map(str::to_owned),
            additive: matches.is_present("additive"),
            amount,
            blend_method: matches.value_of("blend").map(str::to_owned),
            render: RenderOptions { pixels_per_unit, executor, jobs },
        })
    }

    /// Builds the layer from the preset, then applies command-line overrides on top.
    fn layer(&self) -> Result<Halftone3> {
        let subtractive = !self.additive && self.preset.subtractive.unwrap_or(true);
        let mut layer = Halftone3::with_mode(subtractive);
        let rejected = self.preset.apply(&mut layer)?;
        if rejected > 0 {
            warn!("{} preset parameter(s) were ignored", rejected);
        }

        let mut overrides = vec![];
        if self.additive {
            overrides.push(("subtractive", ParamValue::Bool(false)));
        }
        if let Some(size) = self.size {
            overrides.push(("size", ParamValue::Vector(size)));
        }
        if let Some(ref name) = self.mask_type {
            overrides.push(("type", preset::mask_type_param(name)?));
        }
        if let Some(amount) = self.amount {
            overrides.push(("amount", ParamValue::Real(amount)));
        }
        if let Some(ref name) = self.blend_method {
            overrides.push(("blend_method", preset::blend_method_param(name)?));
        }
        for (name, value) in overrides {
            layer.set_param(name, value)?;
        }
        Ok(layer)
    }
}

fn parse_value<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>>
                  where T: std::str::FromStr, T::Err: std::error::Error + Send + Sync + 'static {
    matches.value_of(name)
           .map(|value| value.parse().with_context(|| format!("invalid --{} `{}`", name, value)))
           .transpose()
}

fn parse_size(value: &str) -> Result<Vector2F> {
    let parts = value.split(',')
                     .map(|part| part.trim().parse::<f32>())
                     .collect::<Result<Vec<_>, _>>()
                     .with_context(|| format!("invalid --size `{}`", value))?;
    match parts[..] {
        [size] => Ok(Vector2F::splat(size)),
        [width, height] => Ok(Vector2F::new(width, height)),
        _ => bail!("invalid --size `{}`, expected `S` or `W,H`", value),
    }
}

fn list_params() {
    for desc in Halftone3::param_vocab() {
        let mut line = format!("{:<16} {:<8} {}", desc.name, desc.param_type, desc.local_name);
        if !desc.flags.is_empty() {
            line.push_str(&format!(" {:?}", desc.flags));
        }
        if let Some(ref origin) = desc.origin {
            line.push_str(&format!(" (relative to {})", origin));
        }
        println!("{}", line);
        for value in &desc.enum_values {
            println!("    {:>3} {:<14} {}", value.value, value.name, value.local_name);
        }
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let matches = Options::app().get_matches();
    if matches.is_present("list-params") {
        list_params();
        return Ok(());
    }
    let options = Options::from_matches(&matches)?;
    let layer = options.layer()?;

    let start = Instant::now();
    let input = image::open(&options.input_path)
        .with_context(|| format!("failed to open {}", options.input_path.display()))?
        .to_rgba();
    let (width, height) = input.dimensions();
    let source = Surface::from_rgba8(width, height, &input.into_raw())?;
    info!("loaded {}x{} image in {:?}", width, height, start.elapsed());

    let start = Instant::now();
    let output = layer.build_task(Transform2F::default()).render(&source, &options.render)?;
    info!("rendered with {:?} in {:?}", options.render.executor, start.elapsed());

    let start = Instant::now();
    let output = RgbaImage::from_raw(width, height, output.to_rgba8())
        .ok_or_else(|| anyhow!("rendered image does not match its dimensions"))?;
    output.save(&options.output_path)
          .with_context(|| format!("failed to write {}", options.output_path.display()))?;
    info!("saved {} in {:?}", options.output_path.display(), start.elapsed());
    Ok(())
}
