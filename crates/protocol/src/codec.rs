use std::io::{self, BufRead, Write};

/// Write one newline-delimited message to `writer`.
///
/// Wire format:
///   - message bytes on a single line
///   - terminating `\n`
pub fn write_message_line<W: Write>(writer: &mut W, line: &[u8]) -> io::Result<()> {
    writer.write_all(line)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Read one newline-delimited message from `reader`.
///
/// Returns `None` when the stream is already at end-of-file, otherwise the
/// line's bytes with the trailing `\n` (and `\r`, if any) stripped.
pub fn read_message_line<R: BufRead>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    let n = reader.read_until(b'\n', &mut line)?;
    if n == 0 {
        return Ok(None);
    }
    while matches!(line.last(), Some(b'\n' | b'\r')) {
        line.pop();
    }
    Ok(Some(line))
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
