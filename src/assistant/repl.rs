//! Blocking read-eval-print loop.

use super::session::{Assistant, Reply, FAREWELL, GREETING};
use std::io::{self, BufRead, Write};
use std::borrow::Cow;
use tracing::{info, warn};

/// Run the loop until `close`/`exit` or end of input.
///
/// Replies go to `output`; only I/O failures are returned as errors.
pub fn run<R, W>(
    assistant: &mut Assistant,
    mut input: R,
    output: &mut W,
    prompt: &str,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;
    info!("Assistant session started");

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            info!("End of input reached");
            writeln!(output)?;
            writeln!(output, "{}", FAREWELL)?;
            break;
        }

        // Undecodable bytes become U+FFFD and the line is handled as usual
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            warn!("Input line was not valid UTF-8");
        }

        match assistant.handle(&line) {
            Reply::Continue(text) => writeln!(output, "{}", text)?,
            Reply::Exit(text) => {
                writeln!(output, "{}", text)?;
                break;
            }
        }
    }

    info!(contacts = assistant.directory().len(), "Assistant session finished");
    output.flush()
}
