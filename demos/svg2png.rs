//! Very simple tool that converts an SVG document (basic shapes subset) into a PNG image
#![deny(warnings)]

use std::{env, fs::File, io::BufWriter};
use svgrast::Document;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

type Error = Box<dyn std::error::Error>;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args();
    let cmd = args.next().unwrap_or_else(|| "svg2png".to_string());
    let (input_file, output_file) = match (args.next(), args.next()) {
        (Some(input), Some(output)) => (input, output),
        _ => {
            eprintln!("Convert an SVG document (basic shapes subset) into a PNG image");
            eprintln!("\nUSAGE:");
            eprintln!("    {} <file.svg> <out.png>", cmd);
            std::process::exit(1);
        }
    };

    let text = std::fs::read_to_string(&input_file)?;
    let doc = Document::parse(&text)?;
    let canvas = doc.rasterize();
    canvas.write_png(BufWriter::new(File::create(&output_file)?))?;

    Ok(())
}
