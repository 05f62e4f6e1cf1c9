//! Core type aliases, constants, and runtime utilities for pokercalc.
//!
//! This crate provides the foundational types and run parameters
//! shared by the card model, the equity simulator, and the binaries.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win and tie frequencies, reported as percentages.
pub type Probability = f64;
/// Monte Carlo trial counters.
pub type Trials = u64;
/// Player index in input order.
pub type Position = usize;

// ============================================================================
// SIMULATION PARAMETERS
// ============================================================================
/// Default number of Monte Carlo trials per run.
pub const SIMULATIONS: Trials = 100_000;
/// Trials a worker runs between interrupt checks.
pub const BATCH_SIZE: Trials = 4_096;
/// Hole cards dealt to each player.
pub const HOLE_SIZE: usize = 2;
/// Community cards on a complete board.
pub const BOARD_SIZE: usize = 5;
/// Cards in a ranked poker hand.
pub const HAND_SIZE: usize = 5;
/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term: Box<dyn simplelog::SharedLogger> = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let file = std::fs::create_dir_all("logs")
        .and_then(|_| std::fs::File::create(format!("logs/{}.log", time)))
        .map(|file| simplelog::WriteLogger::new(log::LevelFilter::Debug, config, file))
        .map(|file| file as Box<dyn simplelog::SharedLogger>);
    let loggers: Vec<Box<dyn simplelog::SharedLogger>> = match file {
        Ok(file) => vec![term, file],
        Err(_) => vec![term],
    };
    if simplelog::CombinedLogger::init(loggers).is_err() {
        eprintln!("logger already initialized");
    }
}

/// Global interrupt flag for graceful shutdown coordination.
#[cfg(feature = "server")]
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Optional run deadline from EQUITY_DURATION env var.
#[cfg(feature = "server")]
static DEADLINE: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();
/// Check if graceful shutdown was requested (via stdin "Q") or deadline reached.
#[cfg(feature = "server")]
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
        || DEADLINE
            .get()
            .map_or(false, |d| std::time::Instant::now() >= *d)
}
/// No-op interrupt check when server feature disabled.
#[cfg(not(feature = "server"))]
pub fn interrupted() -> bool {
    false
}
/// Register graceful interrupt handler. Type "Q" + Enter to stop after current batch.
/// Optionally set EQUITY_DURATION env var (e.g., "30s", "5m") for timed runs.
#[cfg(feature = "server")]
pub fn brb() {
    if let Ok(duration) = std::env::var("EQUITY_DURATION") {
        if let Some(deadline) = parse_duration(&duration) {
            let _ = DEADLINE.set(std::time::Instant::now() + deadline);
            log::info!("simulation will stop after {}", duration);
        }
    }
    std::thread::spawn(|| {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().to_uppercase() == "Q" => {
                    log::warn!("graceful interrupt requested, finishing current batch...");
                    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
}
/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
#[cfg(feature = "server")]
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (num, unit) = s.split_at(s.len().saturating_sub(1));
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        "d" => Some(std::time::Duration::from_secs(value * 86400)),
        _ => None,
    }
}
