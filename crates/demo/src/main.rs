// File: crates/demo/src/main.rs
// Summary: Demo fetches ranked populations for a year (or plays a time-lapse over a range) and
// renders each chart to PNG, optionally with its JSON config alongside.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use popchart_core::controls::{play_button, region_toggles};
use popchart_core::theme;
use popchart_core::{Action, BarChart, Config, HttpSource, Region, RenderOptions, Session};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "popchart-demo", about = "Render population bar charts from the barchart API")]
struct Args {
    /// TOML config file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// API base URL (scheme + host + prefix).
    #[arg(long)]
    api_base: Option<String>,
    /// Year to show (defaults to the first year).
    #[arg(long)]
    year: Option<i32>,
    /// Region to filter out; repeatable (e.g. --disable Europe --disable north-america).
    #[arg(long = "disable", value_name = "REGION")]
    disabled: Vec<Region>,
    /// Play the time-lapse from --year up to --to, one frame per year.
    #[arg(long)]
    play: bool,
    /// Last year of the time-lapse (defaults to the last year).
    #[arg(long)]
    to: Option<i32>,
    /// Time-lapse tick period in milliseconds.
    #[arg(long)]
    tick_ms: Option<u64>,
    /// Output directory for frames.
    #[arg(long, default_value = "target/out")]
    out: PathBuf,
    /// Also write each chart config as JSON.
    #[arg(long)]
    json: bool,
    /// light | dark
    #[arg(long, default_value = "light")]
    theme: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    info!(api = %config.api_base, "using API");

    let source = HttpSource::new(config.api_base.clone(), config.request_timeout())
        .context("building HTTP client")?;
    let mut session = Session::new(&config, source);
    for region in &args.disabled {
        session.dispatch(Action::ToggleRegion(*region));
    }
    if let Some(year) = args.year {
        session.dispatch(Action::SetYear(year));
    }

    let wait = config.request_timeout() + Duration::from_secs(1);
    if !session.settle(wait) {
        warn!("request still pending after {:?}", wait);
    }
    log_controls(&session);

    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&args.theme);
    let mut written = write_frame(&session, &args, &opts)?;

    if args.play {
        let to = args.to.unwrap_or(config.year_max).clamp(config.year_min, config.year_max);
        session.dispatch(Action::StartPlayback);
        log_controls(&session);
        let mut last = session.state().year();
        while session.state().year() != to {
            if !session.wait_event(wait) {
                warn!(year = last, "no progress within {:?}; stopping", wait);
                break;
            }
            let year = session.state().year();
            if year != last && !session.state().is_loading() {
                written += write_frame(&session, &args, &opts)?;
                last = year;
            }
        }
        session.dispatch(Action::StopPlayback);
        session.settle(wait);
        if session.state().year() != last {
            written += write_frame(&session, &args, &opts)?;
        }
    }

    info!(frames = written, out = %args.out.display(), "done");
    Ok(())
}

fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(base) = &args.api_base {
        config.api_base = base.clone();
    }
    if let Some(ms) = args.tick_ms {
        config.tick_ms = ms;
    }
    config.validate()?;
    Ok(config)
}

fn log_controls(session: &Session<HttpSource>) {
    let state = session.state();
    let toggles = region_toggles(state)
        .iter()
        .map(|t| if t.active { t.region.to_string() } else { format!("~{}~", t.region) })
        .collect::<Vec<_>>()
        .join(" ");
    info!(year = state.year(), button = play_button(state).label(), "regions: {toggles}");
}

/// Write the current chart; returns how many frames were written (0 when there is no data).
fn write_frame(session: &Session<HttpSource>, args: &Args, opts: &RenderOptions) -> Result<usize> {
    let year = session.state().year();
    let Some(chart) = session.chart() else {
        warn!(year, "no data; nothing rendered");
        return Ok(0);
    };
    let png = frame_path(&args.out, year, "png");
    BarChart::from_config(&chart).render_to_png(opts, &png)?;
    if args.json {
        let json = frame_path(&args.out, year, "json");
        std::fs::write(&json, chart.to_json_pretty()?).with_context(|| format!("writing {}", json.display()))?;
    }
    info!(year, total = chart.total, "wrote {}", png.display());
    Ok(1)
}

/// Produce output file name like target/out/population_<year>.<ext>
fn frame_path(dir: &Path, year: i32, ext: &str) -> PathBuf {
    dir.join(format!("population_{year}.{ext}"))
}
