//! UTF-8 line reading with replacement-character fallback.
//!
//! Options files are decoded as UTF-8. Malformed byte sequences become U+FFFD
//! instead of aborting the read, so a stray byte surfaces as an invalid line
//! with its line number rather than as an I/O error.

use std::io::{self, BufRead};

/// Iterator over the lines of a reader, decoded lossily as UTF-8.
///
/// A line ends at `\n`, `\r\n`, or a lone `\r`; the terminator is stripped.
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
    // Previous line ended in `\r`; a `\n` right after it belongs to that terminator.
    skip_lf: bool,
}

pub fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines { reader, buf: Vec::new(), skip_lf: false }
}

impl<R: BufRead> LossyLines<R> {
    fn take_line(&mut self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        let mut read_any = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            };
            if available.is_empty() {
                return read_any.then(|| Ok(self.take_line()));
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.skip_lf = available[end] == b'\r';
                    self.buf.extend_from_slice(&available[..end]);
                    self.reader.consume(end + 1);
                    return Some(Ok(self.take_line()));
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                    read_any = true;
                }
            }
        }
    }
}
