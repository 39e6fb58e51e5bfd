//! Console blackjack against the dealer.
//!
//! Set `RUST_LOG=debug` to trace the engine on stderr.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack::{Console, GameOptions};

fn main() -> ExitCode {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    log::debug!("seed {seed}");

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    match console.run(GameOptions::default(), seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
