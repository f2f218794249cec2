use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;
use video_games_stats::{config, MemoryBadge, Slot, SlotMap, StatsWidget, WidgetState};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let base_url = config::base_url_from_env();
    let mut builder = StatsWidget::builder().base_url(&base_url);
    match std::env::args().nth(1).as_deref() {
        None | Some("summary") => {}
        Some("listing") => builder = builder.listing(config::DEFAULT_LIMIT),
        Some(other) => {
            eprintln!("usage: video-games-stats [summary|listing] (got '{}')", other);
            return ExitCode::from(2);
        }
    }

    let badges: Vec<(Slot, MemoryBadge)> = Slot::ALL
        .into_iter()
        .map(|slot| (slot, MemoryBadge::with_text("-")))
        .collect();
    let mut slots = SlotMap::new();
    for (slot, badge) in &badges {
        slots.insert(*slot, badge.clone());
    }

    let mut widget = match builder.slots(slots).build() {
        Ok(w) => w,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    info!(%base_url, "loading video game stats");
    let failed = matches!(widget.load(), WidgetState::Failed(_));

    for (slot, badge) in &badges {
        println!("{}: {}", slot, badge.text().unwrap_or_default());
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
