//! Streaming word-wrap session.

use std::borrow::Cow;
use std::io;

use super::engine::LineFiller;
use super::error::WrapError;
use super::options::WrapOptions;

/// A streaming word-wrap session.
///
/// Feed text with [`write`](Self::write) in as many chunks as needed, call
/// [`finish`](Self::finish) once, then read the result as often as you like.
///
/// ```
/// use ansiwrap::WordWrap;
///
/// let mut wrapper = WordWrap::new(10);
/// wrapper.write(b"The quick brown ").unwrap();
/// wrapper.write(b"fox jumps").unwrap();
/// wrapper.finish().unwrap();
/// assert_eq!(wrapper.result_as_text().unwrap(), "The quick\nbrown fox\njumps");
/// ```
#[derive(Debug)]
pub struct WordWrap {
    engine: LineFiller,
    /// Trailing bytes of a UTF-8 sequence split across writes.
    carry: Vec<u8>,
    bytes_in: usize,
    finished: bool,
}

impl WordWrap {
    /// Session wrapping at `limit` columns with default options.
    pub fn new(limit: usize) -> Self {
        Self::with_options(WrapOptions::new(limit))
    }

    pub fn with_options(options: WrapOptions) -> Self {
        Self {
            engine: LineFiller::new(options),
            carry: Vec::new(),
            bytes_in: 0,
            finished: false,
        }
    }

    pub fn options(&self) -> &WrapOptions {
        self.engine.options()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Feed more input. Always accepts the whole chunk.
    pub fn write(&mut self, bytes: &[u8]) -> Result<usize, WrapError> {
        if self.finished {
            return Err(WrapError::AlreadyFinished);
        }
        self.feed(bytes);
        Ok(bytes.len())
    }

    pub fn write_str(&mut self, text: &str) -> Result<usize, WrapError> {
        self.write(text.as_bytes())
    }

    /// Flush trailing buffers. Must be called exactly once before reading.
    pub fn finish(&mut self) -> Result<(), WrapError> {
        if self.finished {
            return Err(WrapError::AlreadyFinished);
        }
        self.finish_inner();
        Ok(())
    }

    /// The wrapped output.
    pub fn result(&self) -> Result<&[u8], WrapError> {
        if !self.finished {
            return Err(WrapError::NotFinished);
        }
        Ok(self.engine.output())
    }

    /// The wrapped output as text. Invalid UTF-8 from a passthrough
    /// session is replaced with U+FFFD.
    pub fn result_as_text(&self) -> Result<Cow<'_, str>, WrapError> {
        self.result().map(String::from_utf8_lossy)
    }

    /// Finish if needed and take the output.
    pub fn into_bytes(mut self) -> Vec<u8> {
        if !self.finished {
            self.finish_inner();
        }
        self.engine.into_output()
    }

    pub fn into_string(self) -> String {
        String::from_utf8(self.into_bytes())
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }

    /// Feed input to a session that is known to be unfinished.
    pub(crate) fn feed(&mut self, bytes: &[u8]) {
        self.bytes_in += bytes.len();

        if self.options().is_passthrough() {
            self.engine.push_raw(bytes);
            return;
        }

        let text = self.decode(bytes);
        self.push_chunk(&text);
    }

    fn finish_inner(&mut self) {
        if !self.carry.is_empty() {
            // Input ended inside a UTF-8 sequence.
            let tail = std::mem::take(&mut self.carry);
            let text = String::from_utf8_lossy(&tail).into_owned();
            self.push_chunk(&text);
        }
        self.engine.finish();
        self.finished = true;
        tracing::debug!(
            bytes_in = self.bytes_in,
            bytes_out = self.engine.output().len(),
            limit = self.options().limit,
            "word-wrap session finished"
        );
    }

    /// Apply the per-chunk rewrites, then run the chunk through the engine.
    ///
    /// Trimming and newline collapsing only see this chunk, so splitting
    /// input differently can change the result when `keep_newlines` is off.
    fn push_chunk(&mut self, text: &str) {
        let options = self.engine.options();
        let mut chunk = Cow::Borrowed(text);

        if !options.keep_newlines {
            chunk = Cow::Owned(
                text.trim()
                    .chars()
                    .map(|c| if options.is_newline(c) { ' ' } else { c })
                    .collect(),
            );
        }

        if options.hard_wrap && chunk.contains('\t') {
            chunk = Cow::Owned(chunk.replace('\t', &options.tab_replacement));
        }

        self.engine.push_str(&chunk);
    }

    /// Decode `bytes`, holding back an incomplete UTF-8 tail for the next write.
    fn decode(&mut self, bytes: &[u8]) -> String {
        self.carry.extend_from_slice(bytes);
        let keep = incomplete_utf8_tail(&self.carry);
        let tail = self.carry.split_off(self.carry.len() - keep);
        let text = String::from_utf8_lossy(&self.carry).into_owned();
        self.carry = tail;
        text
    }
}

impl io::Write for WordWrap {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        WordWrap::write(self, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Length of a truncated multi-byte sequence at the end of `bytes`, if any.
fn incomplete_utf8_tail(bytes: &[u8]) -> usize {
    for back in 1..=bytes.len().min(3) {
        let byte = bytes[bytes.len() - back];
        // Skip continuation bytes until the lead byte.
        if byte & 0b1100_0000 == 0b1000_0000 {
            continue;
        }
        let needed = match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        return if needed > back { back } else { 0 };
    }
    0
}
