//! Line-based blocking notification
//!
//! Used when no interactive terminal is attached: the text is written to a
//! stream and the call blocks until a line (Enter) is read back.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::traits::Notifier;

pub const ACKNOWLEDGE_PROMPT: &str = "Press Enter to continue...";

pub struct LineNotifier<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineNotifier<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the notifier and hand back its streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl LineNotifier<io::StdinLock<'static>, io::Stderr> {
    /// Notifier prompting on stderr and waiting on stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Notifier for LineNotifier<R, W> {
    fn present_and_wait(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write notification")?;
        write!(self.output, "{} ", ACKNOWLEDGE_PROMPT).context("Failed to write prompt")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read acknowledgement")?;
        if read == 0 {
            anyhow::bail!("Input closed before the notification was acknowledged");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_writes_text_and_prompt() {
        let mut notifier = LineNotifier::new(Cursor::new(b"\n".to_vec()), Vec::new());
        notifier.present_and_wait("Save failed: Network down").unwrap();

        let (_, output) = notifier.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "Save failed: Network down\nPress Enter to continue... ");
    }

    #[test]
    fn test_consumes_one_line_per_notification() {
        let mut notifier = LineNotifier::new(Cursor::new(b"\n\n".to_vec()), Vec::new());
        notifier.present_and_wait("first").unwrap();
        notifier.present_and_wait("second").unwrap();
        assert!(notifier.present_and_wait("third").is_err());
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut notifier = LineNotifier::new(Cursor::new(Vec::new()), Vec::new());
        let err = notifier.present_and_wait("Save failed").unwrap_err();
        assert!(err.to_string().contains("acknowledged"));
    }
}
