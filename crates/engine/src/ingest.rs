// crates/engine/src/ingest.rs
use std::io::BufRead;

use log::{debug, warn};

use crate::context::{RunContext, Step};
use crate::fingerprint::LineHasher;
use crate::report::Termination;

/// Reads `reader` line by line into `ctx` until end of input, the cap, or an
/// external finish.
///
/// Read errors end the stream; whatever was counted so far stays valid.
pub fn ingest<R, H>(reader: &mut R, ctx: &RunContext, hasher: &H) -> Termination
where
    R: BufRead + ?Sized,
    H: LineHasher + ?Sized,
{
    let mut buf = Vec::with_capacity(256);

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return Termination::Exhausted,
            Ok(_) => {}
            Err(err) => {
                warn!("read error, treating as end of input: {err}");
                return Termination::Exhausted;
            }
        }

        let line = strip_terminator(&buf);
        let fingerprint = hasher.fingerprint(line);

        match ctx.record(fingerprint, line) {
            Step::Continue => {}
            Step::Capped => {
                debug!("distinct line cap {:?} reached", ctx.cap());
                return Termination::Capped;
            }
            Step::Finished => return Termination::Interrupted,
        }
    }
}

/// Drops a trailing `\n` and then a trailing `\r`.
#[inline]
pub fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
