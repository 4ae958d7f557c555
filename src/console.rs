use crate::input::{self, Command};
use guess_core::{BuzzSignal, RoundConfig, RoundSession, RoundSnapshot};
use std::io;
use std::thread;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};

/// How often the clock is polled. Finer than the tick interval so ticks land close to on time.
const POLL_PERIOD: time::Duration = time::Duration::from_millis(100);

/// The part of the round the player actually sees.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Screen {
    word: &'static str,
    score: i32,
    time: String,
}

impl From<&RoundSnapshot> for Screen {
    fn from(snapshot: &RoundSnapshot) -> Self {
        Self {
            word: snapshot.current_word,
            score: snapshot.score,
            time: snapshot.remaining_time.clone(),
        }
    }
}

impl Screen {
    fn render(&self) -> String {
        format!("[{}] score {:>3} | word: {}", self.time, self.score, self.word)
    }
}

fn buzz_text(signal: BuzzSignal) -> Option<String> {
    let label = match signal {
        BuzzSignal::None => return None,
        BuzzSignal::Correct => "correct!",
        BuzzSignal::CountdownWarning => "hurry up!",
        BuzzSignal::RoundOver => "time's up!",
    };
    Some(format!("*bzz* {label} ({} ms)", signal.duration_ms()))
}

/// Forwards stdin lines to the round loop. A blocked read on this thread never
/// holds up shutdown once the round is over.
fn spawn_stdin_reader() -> io::Result<mpsc::UnboundedReceiver<String>> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read from stdin");
                        break;
                    }
                }
            }
        })?;
    Ok(rx)
}

/// Plays one round on the terminal. Returns once the round ends or the player quits.
pub async fn play(config: RoundConfig) -> io::Result<()> {
    let lines = spawn_stdin_reader()?;

    println!("{}", input::HELP);
    tracing::info!(duration_secs = config.round_duration_secs(), "Round started");

    let last = run_round(RoundSession::new(config), lines).await;
    println!("Final score: {}", last.score);
    match serde_json::to_string(&last) {
        Ok(json) => tracing::debug!(snapshot = %json, "Final round state"),
        Err(e) => tracing::warn!(error = %e, "Could not serialize final round state"),
    }
    Ok(())
}

/// Drives the session from the clock and typed lines until the round finishes,
/// the player quits or input closes. Tears the session down before returning.
async fn run_round(
    mut session: RoundSession,
    mut lines: mpsc::UnboundedReceiver<String>,
) -> RoundSnapshot {
    let mut shown: Option<Screen> = None;
    let mut poll = time::interval(POLL_PERIOD);
    poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_poll = Instant::now();

    loop {
        tokio::select! {
            _ = poll.tick() => {
                let now = Instant::now();
                session.advance(now.duration_since(last_poll));
                last_poll = now;
            }
            line = lines.recv() => {
                let Some(line) = line else {
                    tracing::info!("Input closed, leaving round");
                    break;
                };
                match input::parse(&line) {
                    Some(Command::Correct) => session.on_correct(),
                    Some(Command::Skip) => session.on_skip(),
                    Some(Command::Quit) => break,
                    None => println!("{}", input::HELP),
                }
            }
        }

        if present(&mut session, &mut shown) {
            break;
        }
    }

    session.teardown()
}

/// Draws whatever changed and consumes pending events. Returns true once the round is over.
fn present(session: &mut RoundSession, shown: &mut Option<Screen>) -> bool {
    let snapshot = session.snapshot();

    let screen = Screen::from(&snapshot);
    if shown.as_ref() != Some(&screen) {
        println!("{}", screen.render());
        *shown = Some(screen);
    }

    if let Some(text) = buzz_text(snapshot.buzz_signal) {
        println!("{text}");
        session.acknowledge_buzz();
    }

    if snapshot.round_finished {
        session.acknowledge_round_finished();
        return true;
    }
    false
}
