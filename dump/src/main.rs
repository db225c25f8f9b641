//! A CLI tool for inspecting DICOM files:
//! prints their metadata and optionally exports the grayscale frames
//! as binary PGM files.
use clap::Parser;
use dicomdec_pixeldata::{Frame, ImageParams, MonoDecoder};
use dicomdec_stream::{DicomReader, ReadOptions};
use snafu::{Report, ResultExt, Snafu, Whatever};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;
use tracing::{error, Level};

/// Inspect a DICOM file and optionally export its frames
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// Path to the DICOM file to read
    file: PathBuf,

    /// Override the window width found in the file
    #[arg(short = 'w', long = "window")]
    window: Option<i32>,

    /// Override the window center found in the file
    #[arg(short = 'l', long = "level")]
    level: Option<i32>,

    /// Print all data set elements known to the dictionary
    /// (info about the patient and the medical procedure)
    #[arg(short = 'm', long = "metadata")]
    metadata: bool,

    /// Decode frames and write them as PGM files into this directory
    #[arg(short = 'd', long = "dir")]
    output_dir: Option<PathBuf>,

    /// Run 8-bit samples through the full window/level pipeline
    /// instead of passing them through
    #[arg(long = "full-8bit")]
    full_8bit: bool,

    /// Print more information while working
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("Could not open file {}", path.display()))]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Could not read DICOM stream"))]
    ReadStream {
        #[snafu(backtrace)]
        source: dicomdec_stream::read::Error,
    },

    #[snafu(display("Could not decode frame"))]
    DecodeFrame {
        #[snafu(backtrace)]
        source: dicomdec_pixeldata::Error,
    },

    #[snafu(display("Could not write frame to {}", path.display()))]
    WriteFrame {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    fn to_exit_code(&self) -> i32 {
        match self {
            Error::OpenFile { .. } => -1,
            Error::ReadStream { .. } => -2,
            Error::DecodeFrame { .. } => -3,
            Error::WriteFrame { .. } => -4,
        }
    }
}

fn main() {
    let args = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if args.verbose {
                Level::DEBUG
            } else {
                Level::WARN
            })
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    run(args).unwrap_or_else(|e| {
        let code = e.to_exit_code();
        error!("{}", Report::from_error(e));
        std::process::exit(code);
    });
}

fn run(args: App) -> Result<(), Error> {
    let file = File::open(&args.file).context(OpenFileSnafu { path: &args.file })?;

    let options = ReadOptions {
        window: args.window,
        level: args.level,
        metadata: args.metadata,
    };
    let mut reader =
        DicomReader::new(BufReader::new(file), options).context(ReadStreamSnafu)?;

    println!("Transfer syntax: {}", reader.transfer_syntax().name());
    for (key, value) in &reader.file_meta().entries {
        println!("{}: {}", key, value);
    }

    let mut frames = Vec::new();
    while let Some(packet) = reader.read_packet().context(ReadStreamSnafu)? {
        frames.push(packet);
    }

    for (key, value) in reader.metadata() {
        println!("{}: {}", key, value);
    }

    if frames.is_empty() {
        println!("No pixel data found");
        return Ok(());
    }

    let info = reader.stream_info();
    println!(
        "Image: {}x{}, {} bits ({} stored), {} frame(s), duration {} ms",
        info.width,
        info.height,
        info.bits_per_raw_sample,
        info.bits_per_coded_sample,
        info.nb_frames,
        info.duration,
    );

    let output_dir = match &args.output_dir {
        Some(dir) => dir,
        None => return Ok(()),
    };
    std::fs::create_dir_all(output_dir).context(WriteFrameSnafu { path: output_dir })?;

    let params = match reader.extradata() {
        Some(extradata) => {
            ImageParams::from_extradata(extradata).context(DecodeFrameSnafu)?
        }
        None => reader.image_params(),
    };
    let decoder = MonoDecoder::new(
        info.width,
        info.height,
        info.bits_per_raw_sample,
        info.bits_per_coded_sample,
        params,
        reader.window_level(),
    )
    .context(DecodeFrameSnafu)?
    .with_raw_8bit(!args.full_8bit);

    let stem = args
        .file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".into());
    for (index, packet) in frames.iter().enumerate() {
        let frame = decoder
            .decode_frame(&packet.data, packet.pts, packet.duration)
            .context(DecodeFrameSnafu)?;
        let path = output_dir.join(format!("{}-{:03}.pgm", stem, index));
        write_pgm(&path, &frame).context(WriteFrameSnafu { path: &path })?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Write a frame as a binary PGM (P5) image.
fn write_pgm(path: &PathBuf, frame: &Frame) -> std::io::Result<()> {
    let mut out = File::create(path)?;
    write!(out, "P5\n{} {}\n255\n", frame.width, frame.height)?;
    out.write_all(&frame.data)
}
