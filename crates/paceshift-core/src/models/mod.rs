pub mod config;
pub mod session;

pub use config::IntervalConfig;
pub use session::{IntervalSession, Mode, Phase};
