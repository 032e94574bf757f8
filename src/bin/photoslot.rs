use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "photoslot", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Detect placeholder slots in a frame and print them as JSON.
    Detect(DetectArgs),
    /// Composite shots into a frame's slots.
    Compose(ComposeArgs),
    /// Render a live preview of a partially captured session.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct DetectArgs {
    /// Frame image (PNG with transparency, or white placeholders).
    #[arg(long)]
    frame: PathBuf,

    /// Optional JSON config overriding detection thresholds.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    #[arg(long)]
    frame: PathBuf,

    /// Shot images, in slot order. Reused cyclically when fewer than slots.
    #[arg(long = "shot", required = true)]
    shots: Vec<PathBuf>,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,

    /// Previously detected slots (output of `detect`). Detected from the frame when omitted.
    #[arg(long)]
    slots: Option<PathBuf>,

    #[arg(long)]
    config: Option<PathBuf>,

    /// Output encoding; overrides the config file.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    #[arg(long)]
    frame: PathBuf,

    /// Already captured shots, in slot order.
    #[arg(long = "shot")]
    shots: Vec<PathBuf>,

    /// Live camera image shown in slots without a captured shot.
    #[arg(long)]
    live: Option<PathBuf>,

    #[arg(long, default_value_t = 480)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = FilterChoice::None)]
    filter: FilterChoice,

    /// Show the live image unmirrored.
    #[arg(long)]
    no_mirror: bool,

    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Jpeg,
    Png,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterChoice {
    None,
    Mono,
    Sepia,
    Warm,
    Cool,
}

fn main() -> anyhow::Result<()> {
    photoslot::logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Detect(args) => cmd_detect(args),
        Command::Compose(args) => cmd_compose(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<photoslot::PhotoslotConfig> {
    match path {
        Some(p) => Ok(photoslot::PhotoslotConfig::from_path(p)?),
        None => Ok(photoslot::PhotoslotConfig::default()),
    }
}

fn read_slots_json(path: &Path) -> anyhow::Result<photoslot::SlotSet> {
    let f = File::open(path).with_context(|| format!("open slots '{}'", path.display()))?;
    let r = BufReader::new(f);
    let slots: photoslot::SlotSet =
        serde_json::from_reader(r).with_context(|| "parse slots JSON")?;
    Ok(slots)
}

fn open_shots(paths: &[PathBuf]) -> anyhow::Result<Vec<photoslot::CapturedShot>> {
    paths
        .iter()
        .map(|p| {
            photoslot::CapturedShot::open(p).with_context(|| format!("load shot '{}'", p.display()))
        })
        .collect()
}

fn ensure_parent(out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_detect(args: DetectArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let detector = photoslot::SlotDetector::new(cfg.detect)?;
    let frame = photoslot::FrameImage::open(&args.frame)
        .with_context(|| format!("load frame '{}'", args.frame.display()))?;

    let slots = detector.detect(&frame);
    tracing::info!(
        slots = slots.len(),
        used_alpha_channel = slots.used_alpha_channel,
        "detected"
    );
    println!("{}", serde_json::to_string_pretty(&slots)?);
    Ok(())
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(format) = args.format {
        cfg.compose.format = match format {
            FormatChoice::Jpeg => photoslot::OutputFormat::Jpeg,
            FormatChoice::Png => photoslot::OutputFormat::Png,
        };
    }

    let frame = photoslot::FrameImage::open(&args.frame)
        .with_context(|| format!("load frame '{}'", args.frame.display()))?;
    let slots = match &args.slots {
        Some(p) => read_slots_json(p)?,
        None => photoslot::SlotDetector::new(cfg.detect)?.detect(&frame),
    };
    let shots = open_shots(&args.shots)?;

    let out = photoslot::Compositor::new(cfg.compose)?.compose(&frame, &shots, &slots)?;

    ensure_parent(&args.out)?;
    out.write_to(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let opts = photoslot::PreviewOptions {
        width: args.width,
        height: args.height,
        mirror_live: !args.no_mirror,
        filter: match args.filter {
            FilterChoice::None => photoslot::ToneFilter::None,
            FilterChoice::Mono => photoslot::ToneFilter::Mono,
            FilterChoice::Sepia => photoslot::ToneFilter::Sepia,
            FilterChoice::Warm => photoslot::ToneFilter::Warm,
            FilterChoice::Cool => photoslot::ToneFilter::Cool,
        },
        ..cfg.preview
    };

    let frame = photoslot::FrameImage::open(&args.frame)
        .with_context(|| format!("load frame '{}'", args.frame.display()))?;
    let slots = photoslot::SlotDetector::new(cfg.detect)?.detect(&frame);
    let shots = open_shots(&args.shots)?;
    let live = args
        .live
        .as_deref()
        .map(photoslot::CapturedShot::open)
        .transpose()
        .with_context(|| "load live image")?;

    let img = photoslot::render_preview(&frame, &slots, &shots, live.as_ref(), &opts)?;

    ensure_parent(&args.out)?;
    img.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
