//! A [`Sender`] that prints messages as JSON lines.

use std::io::{self, Write};

use daybook_nav::{Message, Sender};

/// Writes each message as one JSON object per line.
pub struct JsonLinesSender<W> {
    writer: W,
    sent: usize,
}

impl<W: Write> JsonLinesSender<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, sent: 0 }
    }

    pub fn sent(&self) -> usize {
        self.sent
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLinesSender<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Sender for JsonLinesSender<W> {
    type Error = io::Error;

    fn send(&mut self, message: Message) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, &message)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.sent += 1;
        Ok(())
    }
}
