use std::io::{self, BufRead, Write};
use std::sync::Arc;

use flashdeck_host::channel::{AnswerPayload, DeviceSession, RESULT_CORRECT};
use flashdeck_host::config::Config;
use flashdeck_host::logging;
use flashdeck_host::scheduler::types::CardContent;
use flashdeck_host::scheduler::{ProgressStore, SchedulerEngine};
use flashdeck_host::source;
use flashdeck_host::storage::SqliteStore;

fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let _log_guard = logging::init_tracing(&config.log_level);

    let store: Option<Arc<dyn ProgressStore>> = match SqliteStore::open(&config.database_path) {
        Ok(store) => {
            tracing::info!(path = %config.database_path.display(), "progress store opened");
            Some(Arc::new(store))
        }
        Err(err) => {
            tracing::warn!(error = %err, "progress store unavailable, running without persistence");
            None
        }
    };

    let mut engine = SchedulerEngine::new(config.interval_table(), store);
    let contents = load_card_set(&config);
    engine
        .replace_all(contents)
        .expect("failed to install card set");

    tracing::info!(
        cards = engine.deck_len(),
        clock = engine.clock_now(),
        "scheduler ready"
    );

    let mut session = DeviceSession::new(engine);
    review_loop(&mut session);
}

/// Feed file if configured and decodable, the built-in seed set otherwise.
/// A bad feed never replaces the current set.
fn load_card_set(config: &Config) -> Vec<CardContent> {
    if let Some(ref path) = config.feed_path {
        match std::fs::read_to_string(path) {
            Ok(payload) => match source::parse_feed(&payload) {
                Ok(contents) if !contents.is_empty() => {
                    tracing::info!(cards = contents.len(), path = %path.display(), "card set loaded from feed");
                    return contents;
                }
                Ok(_) => tracing::warn!(path = %path.display(), "feed has no usable rows, using seed set"),
                Err(err) => tracing::warn!(error = %err, path = %path.display(), "feed decode failed, using seed set"),
            },
            Err(err) => {
                tracing::warn!(error = %err, path = %path.display(), "feed unreadable, using seed set")
            }
        }
    }
    source::seed_cards()
}

/// Minimal terminal driver: present the head card, reveal on Enter, read the
/// verdict, repeat. Stands in for the device until a transport is attached.
fn review_loop(session: &mut DeviceSession) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let frame = match session.current_frame() {
            Ok(frame) => frame,
            Err(err) => {
                tracing::error!(error = %err, "nothing to present");
                return;
            }
        };

        println!();
        println!("  {}", frame.front);
        print!("  [Enter = reveal, q = quit] ");
        let _ = io::stdout().flush();
        match lines.next() {
            Some(Ok(line)) if line.trim().eq_ignore_ascii_case("q") => return,
            Some(Ok(_)) => {}
            _ => return,
        }

        println!("  {}", frame.back);
        print!("  correct? [y/n/q] ");
        let _ = io::stdout().flush();
        let verdict = match lines.next() {
            Some(Ok(line)) => line.trim().to_lowercase(),
            _ => return,
        };
        if verdict == "q" {
            return;
        }

        let payload = AnswerPayload {
            front: frame.front,
            back: frame.back,
            result: if verdict == "y" { RESULT_CORRECT } else { 0 },
        };
        if let Err(err) = session.handle_answer(&payload) {
            tracing::error!(error = %err, "failed to record outcome");
            return;
        }
    }
}
