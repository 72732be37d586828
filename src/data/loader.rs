use std::io::{self, BufRead};

use crate::error::RejectReason;

use super::model::SampleSequence;

// ---------------------------------------------------------------------------
// Ingestion result
// ---------------------------------------------------------------------------

/// A line that did not produce a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// 1-based line number in the source.
    pub line_no: usize,
    /// The line as read, without its terminator.
    pub text: String,
    pub reason: RejectReason,
}

/// Everything the reader learned from one pass over a source.
#[derive(Debug)]
pub struct Ingestion {
    pub samples: SampleSequence,
    pub rejected: Vec<Rejection>,
    /// Lines consumed, rejected ones included.
    pub lines_read: usize,
    /// Set when a read failure ended ingestion before end-of-stream.
    pub read_error: Option<io::Error>,
}

impl Ingestion {
    fn new() -> Self {
        Self {
            samples: SampleSequence::new(),
            rejected: Vec::new(),
            lines_read: 0,
            read_error: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read one sample per line until end-of-stream.
///
/// End-of-stream is a zero-byte read; a blank line is just a rejected line.
/// Malformed lines are logged and skipped. A read failure stops ingestion
/// and is reported in [`Ingestion::read_error`] together with the samples
/// collected so far. The reader is consumed and dropped before returning.
pub fn read_samples<R: BufRead>(mut reader: R) -> Ingestion {
    let mut out = Ingestion::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                log::error!("Read failed after {} lines: {e}", out.lines_read);
                out.read_error = Some(e);
                break;
            }
        }
        out.lines_read += 1;
        let line_no = out.lines_read;

        match parse_line(&buf) {
            Ok(value) => {
                log::debug!("{line_no}: {value}");
                out.samples.push(value);
            }
            Err(reason) => {
                let text = String::from_utf8_lossy(strip_terminator(&buf)).into_owned();
                log::warn!("Line {line_no} skipped ({reason}): {text:?}");
                out.rejected.push(Rejection {
                    line_no,
                    text,
                    reason,
                });
            }
        }
    }

    log::info!(
        "Processed {} lines: {} samples, {} rejected",
        out.lines_read,
        out.samples.parsed_count(),
        out.rejected.len()
    );
    out
}

/// Parse one raw line (terminator included) into a sample.
pub fn parse_line(raw: &[u8]) -> Result<f64, RejectReason> {
    let text = std::str::from_utf8(raw).map_err(|_| RejectReason::NotUtf8)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RejectReason::Blank);
    }
    Ok(trimmed.parse::<f64>()?)
}

fn strip_terminator(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}
