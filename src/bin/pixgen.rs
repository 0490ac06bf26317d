use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;

#[derive(Parser, Debug)]
#[command(name = "pixgen", version)]
struct Cli {
    /// Log pipeline steps to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a CAPTCHA as a PNG and print its code.
    Captcha(CaptchaArgs),
    /// Render a two-line label as a PNG.
    Label(LabelArgs),
    /// Rotate a PNG about its centre.
    Rotate(RotateArgs),
    /// Apply the wave distortion to a PNG.
    Warp(WarpArgs),
    /// Render a QR code as a PNG.
    Qr(QrArgs),
}

#[derive(Parser, Debug)]
struct CaptchaArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Options JSON; flags given on the command line override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file; system fonts are used when omitted.
    #[arg(long)]
    font: Option<PathBuf>,

    #[arg(long)]
    width: Option<i64>,

    #[arg(long)]
    height: Option<i64>,

    /// Code to draw instead of a random one.
    #[arg(long)]
    code: Option<String>,

    /// Length of a random code.
    #[arg(long)]
    length: Option<usize>,

    #[arg(long, value_enum)]
    disturbance: Option<DisturbanceChoice>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Background colour as a name (`white`) or `#rrggbb`.
    #[arg(long)]
    background: Option<String>,

    /// Skip the wave distortion.
    #[arg(long)]
    no_warp: bool,
}

#[derive(Parser, Debug)]
struct LabelArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Options JSON; flags given on the command line override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file; system fonts are used when omitted.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Main line.
    #[arg(long)]
    text: Option<String>,

    /// Tip line.
    #[arg(long)]
    tip: Option<String>,

    #[arg(long)]
    width: Option<i64>,

    #[arg(long)]
    height: Option<i64>,
}

#[derive(Parser, Debug)]
struct RotateArgs {
    /// Input PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Angle in degrees, counter-clockwise.
    #[arg(long, allow_hyphen_values = true)]
    angle: f64,
}

#[derive(Parser, Debug)]
struct WarpArgs {
    /// Input PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Peak displacement in pixels.
    #[arg(long, default_value_t = 3.0)]
    amplitude: f64,

    /// Wave period in pixels.
    #[arg(long, default_value_t = 40.0)]
    period: f64,
}

#[derive(Parser, Debug)]
struct QrArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Options JSON; flags given on the command line override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Payload to encode.
    #[arg(long)]
    text: Option<String>,

    /// Error correction level: L, M, Q or H.
    #[arg(long)]
    level: Option<String>,

    /// Side of the square image in pixels.
    #[arg(long)]
    size: Option<i64>,

    /// Blank border in pixels, at most a quarter of the size.
    #[arg(long)]
    margin: Option<i64>,

    /// Module colour as a name (`purple`) or `#rrggbb`.
    #[arg(long)]
    color: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DisturbanceChoice {
    Normal,
    Medium,
    High,
}

impl From<DisturbanceChoice> for pixgen::Disturbance {
    fn from(c: DisturbanceChoice) -> Self {
        match c {
            DisturbanceChoice::Normal => Self::Normal,
            DisturbanceChoice::Medium => Self::Medium,
            DisturbanceChoice::High => Self::High,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Captcha(args) => cmd_captcha(args),
        Command::Label(args) => cmd_label(args),
        Command::Rotate(args) => cmd_rotate(args),
        Command::Warp(args) => cmd_warp(args),
        Command::Qr(args) => cmd_qr(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_config<T: DeserializeOwned + Default>(path: Option<&Path>) -> anyhow::Result<T> {
    let Some(path) = path else {
        return Ok(T::default());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let opts = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse config JSON '{}'", path.display()))?;
    Ok(opts)
}

fn make_glyphs(font: Option<&Path>) -> anyhow::Result<pixgen::SvgTextRasterizer> {
    let fonts = match font {
        Some(path) => pixgen::FontBook::from_file(path)?,
        None => pixgen::FontBook::system(),
    };
    Ok(pixgen::SvgTextRasterizer::new(fonts))
}

fn read_png(path: &Path) -> anyhow::Result<pixgen::Canvas> {
    let bytes = std::fs::read(path).with_context(|| format!("read png '{}'", path.display()))?;
    Ok(pixgen::decode_png(&bytes)?)
}

fn write_png(canvas: &pixgen::Canvas, path: &Path) -> anyhow::Result<()> {
    pixgen::save_png(canvas, path)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_captcha(args: CaptchaArgs) -> anyhow::Result<()> {
    let mut opts: pixgen::CaptchaOpts = read_config(args.config.as_deref())?;
    if let Some(v) = args.width {
        opts.width = v;
    }
    if let Some(v) = args.height {
        opts.height = v;
    }
    if let Some(v) = args.code {
        opts.code = v;
    }
    if let Some(v) = args.length {
        opts.length = v;
    }
    if let Some(v) = args.disturbance {
        opts.disturbance = v.into();
    }
    if let Some(v) = args.seed {
        opts.seed = Some(v);
    }
    if let Some(v) = args.background.as_deref() {
        opts.background = Some(pixgen::Rgba8::from_name_or_hex(v)?);
    }
    if args.no_warp {
        opts.warp = false;
    }

    let glyphs = make_glyphs(args.font.as_deref())?;
    let captcha = pixgen::generate_captcha(&opts, &glyphs)?;
    write_png(&captcha.canvas, &args.out)?;
    println!("{}", captcha.code);
    Ok(())
}

fn cmd_label(args: LabelArgs) -> anyhow::Result<()> {
    let mut opts: pixgen::LabelOpts = read_config(args.config.as_deref())?;
    if let Some(v) = args.text {
        opts.text = v;
    }
    if let Some(v) = args.tip {
        opts.tip = v;
    }
    if let Some(v) = args.width {
        opts.width = v;
    }
    if let Some(v) = args.height {
        opts.height = v;
    }

    let glyphs = make_glyphs(args.font.as_deref())?;
    let canvas = pixgen::render_label(&opts, &glyphs)?;
    write_png(&canvas, &args.out)
}

fn cmd_rotate(args: RotateArgs) -> anyhow::Result<()> {
    let src = read_png(&args.in_path)?;
    let out = pixgen::rotate(&src, args.angle)?;
    write_png(&out, &args.out)
}

fn cmd_warp(args: WarpArgs) -> anyhow::Result<()> {
    let mut canvas = read_png(&args.in_path)?;
    pixgen::warp(&mut canvas, args.amplitude, args.period)?;
    write_png(&canvas, &args.out)
}

fn cmd_qr(args: QrArgs) -> anyhow::Result<()> {
    let mut opts: pixgen::QrOpts = read_config(args.config.as_deref())?;
    if let Some(v) = args.text {
        opts.text = v;
    }
    if let Some(v) = args.level.as_deref() {
        opts.level = v.parse()?;
    }
    if let Some(v) = args.size {
        opts.size = v;
    }
    if let Some(v) = args.margin {
        opts.margin = v;
    }
    if let Some(v) = args.color.as_deref() {
        opts.foreground = pixgen::Rgba8::from_name_or_hex(v)?;
    }

    let canvas = pixgen::render_qr(&opts)?;
    write_png(&canvas, &args.out)
}
