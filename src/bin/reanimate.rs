use std::f64::consts::PI;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use reanimate::{
    Affine, Anim, AnimExt, Animator, AnimatorConfig, HeadlessView, Point, View, ViewState, presets,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reanimate", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Animator config JSON.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured time scale (`0.5` runs twice as fast).
    #[arg(long, global = true)]
    time_scale: Option<f64>,

    /// Wall-clock time to let the demo run before cancelling it.
    #[arg(long, global = true, default_value_t = 3000)]
    run_for_ms: u64,

    /// Print every view's recorded state as JSON.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Three staggered circles that grow and fade forever.
    Pulse,
    /// A horse that slides and squashes, then rocks indefinitely.
    RockingHorse,
    /// An indeterminate progress indicator sweeping left and right.
    ProgressBar(ProgressBarArgs),
}

#[derive(Parser, Debug)]
struct ProgressBarArgs {
    /// Width of the track the indicator sweeps across.
    #[arg(long, default_value_t = 300.0)]
    track_width: f64,

    /// Width of the indicator itself.
    #[arg(long, default_value_t = 20.0)]
    bar_width: f64,
}

struct Scene {
    view: HeadlessView,
    animations: Vec<Anim<HeadlessView>>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AnimatorConfig::from_path(path)?,
        None => AnimatorConfig::default(),
    };
    if let Some(scale) = cli.time_scale {
        config.time_scale = scale;
    }
    let animator = Animator::timer()
        .with_config(config)
        .context("configure animator")?;

    let scenes = match &cli.cmd {
        Command::Pulse => pulse(),
        Command::RockingHorse => rocking_horse()?,
        Command::ProgressBar(args) => progress_bar(args)?,
    };

    let handles: Vec<_> = scenes
        .iter()
        .map(|s| animator.spawn(s.view.clone(), s.animations.clone()))
        .collect();
    tracing::info!(views = scenes.len(), run_for_ms = cli.run_for_ms, "demo started");

    tokio::time::sleep(Duration::from_millis(cli.run_for_ms)).await;
    for handle in &handles {
        handle.cancel();
    }

    let states: Vec<ViewState> = scenes.iter().map(|s| s.view.snapshot()).collect();
    if cli.json {
        let out = serde_json::to_string_pretty(&states).context("serialize view states")?;
        println!("{out}");
    } else {
        for s in &states {
            println!(
                "{}: {} changes, alpha {:.3}, center ({:.1}, {:.1}), hidden {}",
                s.name,
                s.changes.len(),
                s.alpha,
                s.center.x,
                s.center.y,
                s.hidden
            );
        }
    }
    Ok(())
}

fn pulse() -> Vec<Scene> {
    (0..3u32)
        .map(|i| {
            let view = HeadlessView::new(format!("circle-{i}"));
            let grow = presets::scale::<HeadlessView>(3.0, 3.0, Duration::from_secs(3))
                & presets::alpha::<HeadlessView>(0.0, Duration::from_secs(3));
            let reset = presets::mutate(|v: &HeadlessView| {
                v.set_alpha(0.75);
                v.set_transform(Affine::IDENTITY);
            });
            let animation = (grow + reset)
                .indefinite()
                .delayed_by(Duration::from_millis(700) * i);
            Scene {
                view,
                animations: vec![animation],
            }
        })
        .collect()
}

fn rocking_horse() -> anyhow::Result<Vec<Scene>> {
    let view = HeadlessView::new("horse").at(Point::new(100.0, 100.0));
    let duration = Duration::from_secs(2);
    let sway = presets::move_by::<HeadlessView>(40.0, 0.0, duration)
        & (presets::scale::<HeadlessView>(0.5, 1.0, duration / 2)
            + presets::scale(1.0, 1.0, duration));
    let rock = presets::rotate_fn::<HeadlessView>(PI, 0.1, |t| (4.0 * t).sin() / 2.0)
        .context("build rocking rotation")?
        .indefinite();
    Ok(vec![Scene {
        view,
        animations: vec![sway, rock],
    }])
}

fn progress_bar(args: &ProgressBarArgs) -> anyhow::Result<Vec<Scene>> {
    let offset = args.track_width - args.bar_width;
    if !offset.is_finite() || offset < 0.0 {
        anyhow::bail!(
            "track width {} must be at least the bar width {}",
            args.track_width,
            args.bar_width
        );
    }
    let view = HeadlessView::new("progress").at(Point::new(args.bar_width / 2.0, 2.0));
    let sweep = |dx: f64| -> Anim<HeadlessView> {
        let half = Duration::from_secs(1);
        presets::move_by::<HeadlessView>(dx, 0.0, half * 2)
            & (presets::scale::<HeadlessView>(3.0, 1.0, half) + presets::scale(1.0, 1.0, half))
    };
    let animation = (sweep(offset) + sweep(-offset)).indefinite();
    Ok(vec![Scene {
        view,
        animations: vec![animation],
    }])
}
