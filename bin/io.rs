use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Lines, Read, Write};
use tracing::instrument;

/// A line oriented terminal.
#[derive(Debug)]
pub struct Terminal<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Terminal<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Terminal {
            writer,
            reader: BufReader::new(reader).lines(),
        }
    }

    /// Receive a line, or `None` once the input is exhausted.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn recv(&mut self) -> io::Result<Option<String>> {
        self.reader.next().transpose()
    }

    /// Send a line.
    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    pub fn send<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(&mut self.writer, "{msg}")
    }

    /// Draw a frame and make sure it reaches the screen.
    #[instrument(level = "trace", skip(self, frame), err)]
    pub fn draw<T: Display>(&mut self, frame: T) -> io::Result<()> {
        writeln!(&mut self.writer, "{frame}")?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::VecDeque, io::empty, str};
    use test_strategy::proptest;

    #[proptest]
    fn recv_waits_for_line_break(#[strategy("[^\r\n]*")] s: String) {
        let mut buf = VecDeque::new();
        writeln!(&mut buf, "{s}")?;
        let mut term = Terminal::new(empty(), &mut buf);
        assert_eq!(term.recv()?, Some(s));
    }

    #[test]
    fn recv_returns_none_once_input_is_exhausted() {
        let mut term = Terminal::new(empty(), empty());
        assert_eq!(term.recv().unwrap(), None);
    }

    #[proptest]
    fn send_appends_line_break(s: String) {
        let mut buf = Vec::new();
        let mut term = Terminal::new(&mut buf, empty());
        term.send(&s)?;
        drop(term);
        assert_eq!(str::from_utf8(&buf)?, format!("{s}\n"));
    }

    #[proptest]
    fn draw_appends_line_break(s: String) {
        let mut buf = Vec::new();
        let mut term = Terminal::new(&mut buf, empty());
        term.draw(&s)?;
        drop(term);
        assert_eq!(str::from_utf8(&buf)?, format!("{s}\n"));
    }
}
