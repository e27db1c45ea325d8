use std::{path::PathBuf, sync::Arc, time::Instant};

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand};
use gladia_studio::prototypes::{server, store::PrototypeStore};
use gladia_studio::tokens::{clipboard, export, viewer::ViewerState};
use gladia_studio::{
    Composition, CompositionRegistry, FrameIndex, FrameRange, PngSequenceSink, RenderStats,
    RenderThreading, RenderToMp4Opts, StudioConfig,
};

#[derive(Parser, Debug)]
#[command(name = "gladia-studio", version)]
struct Cli {
    /// JSON config file (fonts, threading defaults, prototypes file, server address).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (`-v` info, `-vv` debug). `RUST_LOG` wins when set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered compositions.
    List,
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Write the scene of a single frame as SVG (or JSON).
    Svg(SvgArgs),
    /// Render a frame range as a PNG sequence.
    Frames(FramesArgs),
    /// Render an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Inspect and export design tokens.
    #[command(subcommand)]
    Tokens(TokensCommand),
    /// Serve `/api/prototypes` backed by a JSON file.
    Serve(ServeArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Composition id.
    #[arg(long)]
    id: String,

    /// Frame index (0-based; wraps past the duration).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Output scale relative to the composition canvas.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    /// Composition id.
    #[arg(long)]
    id: String,

    /// Frame index (0-based; wraps past the duration).
    #[arg(long)]
    frame: u64,

    /// Output path.
    #[arg(long)]
    out: PathBuf,

    /// Dump the scene model as JSON instead of SVG.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct RangeArgs {
    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the composition duration.
    #[arg(long)]
    end: Option<u64>,
}

#[derive(Args, Debug)]
struct ThreadingArgs {
    /// Render chunks in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads (implies --parallel).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per chunk.
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Reuse identical frames within a chunk.
    #[arg(long)]
    static_frame_elision: bool,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Composition id.
    #[arg(long)]
    id: String,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    #[command(flatten)]
    range: RangeArgs,

    #[command(flatten)]
    threading: ThreadingArgs,

    /// Output scale relative to the composition canvas.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Composition id.
    #[arg(long)]
    id: String,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    range: RangeArgs,

    #[command(flatten)]
    threading: ThreadingArgs,

    /// Output scale relative to the composition canvas.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
}

#[derive(Subcommand, Debug)]
enum TokensCommand {
    /// Print the token groups of a page, filtered by a search string.
    List {
        /// Page id (`colors`, `spacing`, `typography`, ...); unknown ids show colors.
        #[arg(long, default_value = "colors")]
        page: String,

        /// Case-insensitive substring filter on name, value or usage.
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Print the whole catalog as a CSS `:root` block.
    Css,
    /// Print the whole catalog as JSON.
    Json,
    /// Print the concrete value of a token, following aliases.
    Resolve {
        /// Token name, e.g. `--text-primary`.
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// Copy `var(<name>)` to the system clipboard.
    Copy {
        /// Token name, e.g. `--color-purple-400`.
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Listen address (defaults to the config value).
    #[arg(long)]
    addr: Option<String>,

    /// Prototypes JSON file (defaults to the config value).
    #[arg(long)]
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let cfg = StudioConfig::load_or_default(cli.config.as_deref())?;
    gladia_studio::render::fonts::set_layout_fonts_dir(cfg.fonts_dir.as_deref());
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Frame(args) => cmd_frame(&cfg, args),
        Command::Svg(args) => cmd_svg(args),
        Command::Frames(args) => cmd_frames(&cfg, args),
        Command::Render(args) => cmd_render(&cfg, args),
        Command::Tokens(cmd) => cmd_tokens(cmd),
        Command::Serve(args) => cmd_serve(&cfg, args),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn lookup(id: &str) -> anyhow::Result<Arc<dyn Composition>> {
    Ok(CompositionRegistry::builtin().require(id)?)
}

fn make_backend(
    cfg: &StudioConfig,
    scale: f64,
) -> anyhow::Result<Box<dyn gladia_studio::RenderBackend>> {
    let settings = cfg.render_settings(scale);
    Ok(gladia_studio::create_backend(
        gladia_studio::BackendKind::Cpu,
        &settings,
    )?)
}

fn frame_range(comp: &dyn Composition, args: &RangeArgs) -> anyhow::Result<FrameRange> {
    let end = args.end.unwrap_or(comp.video_config().duration);
    FrameRange::new(FrameIndex(args.start), FrameIndex(end))
        .with_context(|| format!("frame range {}..{end}", args.start))
}

fn threading(cfg: &StudioConfig, args: &ThreadingArgs) -> RenderThreading {
    let mut t = cfg.threading.clone();
    t.parallel |= args.parallel || args.threads.is_some();
    t.static_frame_elision |= args.static_frame_elision;
    if let Some(n) = args.threads {
        t.threads = Some(n);
    }
    if let Some(n) = args.chunk_size {
        t.chunk_size = n;
    }
    t
}

fn print_stats(stats: RenderStats) {
    eprintln!(
        "{} frames ({} rendered, {} elided)",
        stats.frames_total, stats.frames_rendered, stats.frames_elided
    );
}

fn cmd_list() -> anyhow::Result<()> {
    for (id, vc) in CompositionRegistry::builtin().configs() {
        println!(
            "{id:<22} {}x{:<6} {:>3} fps {:>5} frames",
            vc.canvas.width,
            vc.canvas.height,
            vc.fps.as_f64(),
            vc.duration
        );
    }
    Ok(())
}

fn cmd_frame(cfg: &StudioConfig, args: FrameArgs) -> anyhow::Result<()> {
    let comp = lookup(&args.id)?;
    let mut backend = make_backend(cfg, args.scale)?;
    let frame =
        gladia_studio::render_frame(comp.as_ref(), FrameIndex(args.frame), backend.as_mut())?;
    gladia_studio::encode::png::write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let comp = lookup(&args.id)?;
    let scene = gladia_studio::evaluate_frame(comp.as_ref(), FrameIndex(args.frame));
    let text = if args.json {
        serde_json::to_string_pretty(&scene).context("serialize scene")?
    } else {
        gladia_studio::scene_to_svg(&scene)
    };
    gladia_studio::encode::ffmpeg::ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, text)
        .with_context(|| format!("write '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(cfg: &StudioConfig, args: FramesArgs) -> anyhow::Result<()> {
    let comp = lookup(&args.id)?;
    let range = frame_range(comp.as_ref(), &args.range)?;
    let mut backend = make_backend(cfg, args.scale)?;
    let mut sink = PngSequenceSink::new(&args.out_dir);
    let stats = gladia_studio::render_range(
        comp.as_ref(),
        range,
        backend.as_mut(),
        &threading(cfg, &args.threading),
        &mut sink,
    )?;
    print_stats(stats);
    eprintln!(
        "wrote {} files to {}",
        sink.written().len(),
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_render(cfg: &StudioConfig, args: RenderArgs) -> anyhow::Result<()> {
    let comp = lookup(&args.id)?;
    let range = frame_range(comp.as_ref(), &args.range)?;
    let mut backend = make_backend(cfg, args.scale)?;
    let opts = RenderToMp4Opts {
        range,
        bg_rgba: cfg.bg_rgba,
        overwrite: true,
        threading: threading(cfg, &args.threading),
    };
    let stats =
        gladia_studio::render_to_mp4_with_stats(comp.as_ref(), &args.out, opts, backend.as_mut())?;
    print_stats(stats);
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_tokens(cmd: TokensCommand) -> anyhow::Result<()> {
    match cmd {
        TokensCommand::List { page, search } => {
            let mut state = ViewerState::new();
            state.select_page(&page);
            state.set_search(search);
            let page = state.page();
            if !page.is_token_page() {
                println!("{}: component page, no tokens", page.label());
                return Ok(());
            }
            for group in state.visible_groups() {
                println!("# {}", group.title);
                for t in group.tokens {
                    println!("{:<28} {:<40} {}", t.name, t.value, t.usage.unwrap_or(""));
                }
                println!();
            }
            let presets = state.visible_presets();
            if !presets.is_empty() {
                println!("# Type Presets");
                for p in presets {
                    println!(
                        "{:<16} {:>3}px {:>4} {:>5} {}",
                        p.name, p.size_px, p.weight, p.line_height, p.letter_spacing
                    );
                }
            }
        }
        TokensCommand::Css => print!("{}", export::catalog_css()),
        TokensCommand::Json => println!("{}", export::catalog_json()?),
        TokensCommand::Resolve { name } => println!("{}", export::resolve(&name)?),
        TokensCommand::Copy { name } => {
            let mut state = ViewerState::new();
            let mut target = clipboard::system_clipboard();
            let reference = export::css_reference(&name);
            if state.copy(&name, target.as_mut(), Instant::now()) {
                eprintln!("copied {reference}");
            } else {
                eprintln!("clipboard unavailable");
            }
            println!("{reference}");
        }
    }
    Ok(())
}

fn cmd_serve(cfg: &StudioConfig, args: ServeArgs) -> anyhow::Result<()> {
    let addr = args.addr.unwrap_or_else(|| cfg.server_addr.clone());
    let file = args.file.unwrap_or_else(|| cfg.prototypes_file.clone());
    let store = PrototypeStore::new(file);
    let path = store.path().display().to_string();
    let server = server::bind(&addr, store)?;
    eprintln!(
        "serving {} on http://{}{}",
        path,
        server.server_addr(),
        server::ROUTE
    );
    server.run();
    Ok(())
}
