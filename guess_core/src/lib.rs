pub mod clock;
pub mod config;
pub mod error;
pub mod logic;
pub mod session;

pub use clock::{ClockEvent, Countdown, CountdownStatus};
pub use config::RoundConfig;
pub use error::ConfigError;
pub use logic::buzz::BuzzSignal;
pub use logic::round::{RoundPhase, RoundSnapshot, RoundState};
pub use session::RoundSession;
