use clap::Parser;
use tracing::Level;

/// Interactive single-account ATM simulator.
#[derive(Parser, Debug)]
#[command(name = "atm_console", version, about)]
pub struct Args {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// PIN attempts allowed before the session is terminated.
    #[arg(long, default_value_t = SessionConfig::DEFAULT_MAX_PIN_ATTEMPTS,
          value_parser = clap::value_parser!(u32).range(1..=9))]
    pub max_pin_attempts: u32,
}

impl Args {
    /// `None` leaves logging off.
    pub fn log_level(&self) -> Option<Level> {
        match self.verbose {
            0 => None,
            1 => Some(Level::INFO),
            2 => Some(Level::DEBUG),
            _ => Some(Level::TRACE),
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            max_pin_attempts: self.max_pin_attempts,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_pin_attempts: u32,
}

impl SessionConfig {
    pub const DEFAULT_MAX_PIN_ATTEMPTS: u32 = 3;
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_pin_attempts: Self::DEFAULT_MAX_PIN_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_three_attempts_and_no_logging() {
        let args = Args::try_parse_from(["atm_console"]).unwrap();
        assert_eq!(args.session_config(), SessionConfig::default());
        assert_eq!(args.log_level(), None);
    }

    #[test]
    fn verbosity_flags_raise_level() {
        let args = Args::try_parse_from(["atm_console", "-vv", "--max-pin-attempts", "5"]).unwrap();
        assert_eq!(args.log_level(), Some(Level::DEBUG));
        assert_eq!(args.session_config().max_pin_attempts, 5);
    }

    #[test]
    fn zero_attempts_is_rejected() {
        assert!(Args::try_parse_from(["atm_console", "--max-pin-attempts", "0"]).is_err());
    }
}
