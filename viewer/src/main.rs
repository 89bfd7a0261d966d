use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

use viewer::commands::Input;
use viewer::driver::DriverOptions;

/// Plays back a parsed match and writes one JSON frame per line to stdout.
#[derive(Debug, clap::Parser)]
struct Args {
    /// Match file as produced by the demo parser
    match_file: std::path::PathBuf,

    /// Directory with `<map>.json` radar configs
    #[arg(long)]
    map_configs: Option<std::path::PathBuf>,

    /// Use this map's radar instead of the one the match was played on
    #[arg(long)]
    map: Option<String>,

    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Width and height of the drawing surface in pixels
    #[arg(long, default_value_t = 700.0)]
    size: f64,

    #[arg(long, default_value_t = 32)]
    trail_length: usize,

    /// Round to start with, counted from 1
    #[arg(long, default_value_t = 1)]
    round: usize,

    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Exit once the round has been played to its end
    #[arg(long)]
    exit_at_end: bool,

    /// Do not read commands from stdin
    #[arg(long)]
    no_stdin: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("viewer") || meta.target().contains("playback")
        }));
    if let Err(e) = tracing::subscriber::set_global_default(registry) {
        eprintln!("Setting up logging: {}", e);
        return std::process::ExitCode::FAILURE;
    }

    let args = Args::parse();

    match run(args).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), viewer::Error> {
    tracing::info!("Starting...");

    let parsed = viewer::loading::load_match(&args.match_file)?;
    let map = viewer::loading::resolve_map_config(
        &parsed,
        args.map_configs.as_deref(),
        args.map.as_deref(),
    )?;
    tracing::info!(map = %map.name, "Using radar");

    let config = playback::Config {
        surface_width: args.size,
        surface_height: args.size,
        trail_length: args.trail_length,
        ..playback::Config::default()
    };
    let mut session = playback::Playback::new(&parsed.rounds, &map, config);

    if !playback::SPEEDS.contains(&args.speed) {
        tracing::warn!(speed = args.speed, allowed = ?playback::SPEEDS, "Unsupported speed, playing at 1x");
    }
    session.handle(playback::Command::SetSpeed(args.speed));
    if args.round > 1 {
        session.handle(playback::Command::SetRound(args.round - 1));
    }

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Input>();
    if !args.no_stdin {
        viewer::commands::spawn_stdin_reader(tx)?;
    } else {
        drop(tx);
    }

    let mut sink = viewer::sink::JsonLines::new(std::io::stdout().lock());
    let options = DriverOptions {
        fps: args.fps,
        exit_at_end: args.exit_at_end,
    };
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Listening for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    viewer::driver::run(session, &mut sink, &mut rx, options, shutdown).await?;

    Ok(())
}
