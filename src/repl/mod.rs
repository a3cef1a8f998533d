//! REPL Module
//!
//! Reads commands line by line and runs them until `exit` or end of input.

pub mod command;
pub mod handlers;
pub mod session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::error::Result;

pub use command::{clean_input, Command, CommandInfo, COMMANDS};
pub use handlers::{Flow, Repl};
pub use session::{CatchRoll, CaughtPokemon, RandomRoll, Session};

pub const PROMPT: &str = "pokedex > ";

/// Runs the read-eval-print loop.
///
/// Command errors are printed and the loop continues; only a failure to
/// read input or write output ends it with an error. Returns `Ok` on `exit`
/// or end of input.
pub async fn run<R, W>(repl: &mut Repl, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            debug!("End of input");
            return Ok(());
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        };

        debug!(?command, "Running command");
        match repl.execute(command, out).await {
            Ok(Flow::Exit) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(err) => writeln!(out, "{}", err)?,
        }
    }
}
