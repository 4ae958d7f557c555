use crate::clock::{ClockEvent, Countdown};
use crate::config::RoundConfig;
use crate::logic::round::{RoundSnapshot, RoundState};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// A round together with the countdown that drives it.
///
/// The session owns its countdown, so clock events can only ever reach the
/// round it was started with. Dropping the session cancels the countdown;
/// `teardown` does the same explicitly and hands back the final values.
#[derive(Debug)]
pub struct RoundSession<R: Rng = StdRng> {
    state: RoundState<R>,
    countdown: Countdown,
}

impl RoundSession<StdRng> {
    #[must_use]
    pub fn new(config: RoundConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> RoundSession<R> {
    /// Builds the round and arms its countdown. The initial tick is delivered
    /// before this returns.
    pub fn with_rng(config: RoundConfig, rng: R) -> Self {
        let mut session = Self {
            state: RoundState::with_rng(config, rng),
            countdown: Countdown::new(config.round_duration_ms, config.tick_interval_ms),
        };
        let events = session.countdown.start();
        session.dispatch(events);
        session
    }

    /// Reports elapsed wall time to the countdown and applies every event it
    /// produced. Returns how many events were delivered.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let events = self.countdown.advance(elapsed_ms);
        let delivered = events.len();
        self.dispatch(events);
        delivered
    }

    fn dispatch(&mut self, events: Vec<ClockEvent>) {
        for event in events {
            match event {
                ClockEvent::Tick { remaining_ms } => self.state.on_tick(remaining_ms),
                ClockEvent::Finish => self.state.on_finish(),
            }
        }
    }

    pub fn on_skip(&mut self) {
        self.state.on_skip();
    }

    pub fn on_correct(&mut self) {
        self.state.on_correct();
    }

    pub fn acknowledge_round_finished(&mut self) {
        self.state.acknowledge_round_finished();
    }

    pub fn acknowledge_buzz(&mut self) {
        self.state.acknowledge_buzz();
    }

    #[must_use]
    pub const fn state(&self) -> &RoundState<R> {
        &self.state
    }

    #[must_use]
    pub const fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        self.state.snapshot()
    }

    /// Stops the countdown and discards the round.
    pub fn teardown(mut self) -> RoundSnapshot {
        self.cancel_clock();
        self.state.snapshot()
    }

    fn cancel_clock(&mut self) {
        if self.countdown.is_running() {
            self.countdown.cancel();
        }
        info!(
            "Round torn down with score {} ({} ms left on the clock)",
            self.state.score(),
            self.countdown.remaining_ms()
        );
    }
}

impl<R: Rng> Drop for RoundSession<R> {
    fn drop(&mut self) {
        if self.countdown.is_running() {
            self.cancel_clock();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::CountdownStatus;
    use crate::logic::buzz::BuzzSignal;
    use crate::logic::round::RoundPhase;
    use std::sync::Mutex;

    static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = CAPTURED.lock() {
                lines.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;

    fn capture_logs() {
        // Another test may already have installed it.
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Info);
    }

    fn captured(line: &str) -> bool {
        CAPTURED
            .lock()
            .map(|lines| lines.iter().any(|l| l == line))
            .unwrap_or(false)
    }

    fn new_session() -> RoundSession {
        RoundSession::with_rng(RoundConfig::default(), StdRng::seed_from_u64(5))
    }

    #[test]
    fn test_start_delivers_initial_tick() {
        let session = new_session();
        assert!(session.countdown().is_running());
        assert_eq!(session.state().remaining_time_seconds(), 10);
        assert_eq!(session.snapshot().remaining_time, "00:10");
    }

    #[test]
    fn test_advance_routes_ticks() {
        let mut session = new_session();
        assert_eq!(session.advance(Duration::from_millis(1_000)), 1);
        assert_eq!(session.state().remaining_time_seconds(), 9);
        assert_eq!(session.advance(Duration::from_millis(500)), 0);
        assert_eq!(session.state().remaining_time_seconds(), 9);
    }

    #[test]
    fn test_advance_to_end_finishes_round() {
        let mut session = new_session();
        session.advance(Duration::from_secs(10));

        let state = session.state();
        assert!(state.round_finished());
        assert_eq!(state.phase(), RoundPhase::Finished);
        assert_eq!(state.buzz_signal(), BuzzSignal::RoundOver);
        assert_eq!(session.countdown().status(), CountdownStatus::Finished);
        assert_eq!(session.advance(Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_actions_forward_to_state() {
        let mut session = new_session();
        session.on_correct();
        session.on_correct();
        session.on_skip();
        assert_eq!(session.state().score(), 1);
        assert_eq!(session.state().buzz_signal(), BuzzSignal::Correct);

        session.acknowledge_buzz();
        assert_eq!(session.state().buzz_signal(), BuzzSignal::None);
    }

    #[test]
    fn test_acknowledge_round_finished() {
        let mut session = new_session();
        session.advance(Duration::from_secs(11));
        session.acknowledge_round_finished();
        assert!(!session.state().round_finished());
    }

    #[test]
    fn test_teardown_returns_final_values() {
        let mut session = new_session();
        session.on_correct();
        session.advance(Duration::from_secs(3));
        let before = session.snapshot();

        let last = session.teardown();
        assert_eq!(last, before);
        assert_eq!(last.remaining_time_seconds, 7);
        assert!(!last.round_finished);
    }

    #[test]
    fn test_drop_mid_round_cancels_clock() {
        capture_logs();
        let mut session = new_session();
        for _ in 0..13 {
            session.on_skip();
        }
        session.advance(Duration::from_secs(3));
        assert!(session.countdown().is_running());

        drop(session);
        assert!(captured("Round torn down with score -13 (7000 ms left on the clock)"));
    }

    #[test]
    fn test_drop_on_early_return_cancels_clock() {
        fn play_until_error(session: &mut RoundSession) -> Result<(), &'static str> {
            for _ in 0..17 {
                session.on_correct();
            }
            session.advance(Duration::from_secs(6));
            Err("player left")
        }

        capture_logs();
        let outcome = (|| {
            let mut session = new_session();
            play_until_error(&mut session)?;
            Ok::<_, &'static str>(session.teardown())
        })();

        assert!(outcome.is_err());
        assert!(captured("Round torn down with score 17 (4000 ms left on the clock)"));
    }
}
