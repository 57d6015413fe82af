//! Write confirmation.
//!
//! The preview goes to stdout, followed by the prompt. On a terminal the
//! answer is read through `dialoguer`; with piped or redirected stdin a single
//! raw line is read instead.

use std::io::{BufRead, IsTerminal, Write};

use console::Term;
use dialoguer::{Input, theme::SimpleTheme};
use eyre::{Context, Result};
use typesync_core::{Confirm, Preview};

use crate::reports::{PreviewReport, Report, TerminalOutput};

/// Prompt shown after the preview. Rendered as `confirm? [y\n]: `.
const PROMPT: &str = "confirm? [y\\n]";

/// The only answer that confirms a write.
const CONFIRM_ANSWER: &str = "y";

/// Somewhere to ask a question and read back one answer.
pub trait AnswerSource {
    fn read_answer(&mut self, prompt: &str) -> Result<String>;
}

impl<A: AnswerSource + ?Sized> AnswerSource for Box<A> {
    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        (**self).read_answer(prompt)
    }
}

/// Interactive terminal input, prompting on stdout.
pub struct TerminalAnswer;

impl AnswerSource for TerminalAnswer {
    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&SimpleTheme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&Term::stdout())
            .wrap_err("Failed to read confirmation")
    }
}

/// One line from a reader, with the prompt written to `writer`.
///
/// Only the line terminator is stripped. End of input reads as an empty
/// answer.
pub struct LineAnswer<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineAnswer<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> AnswerSource for LineAnswer<R, W> {
    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .wrap_err("Failed to read confirmation")?;

        Ok(strip_line_terminator(&line).to_string())
    }
}

fn strip_line_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// Prints the preview and asks before writing.
pub struct PromptConfirm<A> {
    answers: A,
}

impl<A: AnswerSource> PromptConfirm<A> {
    pub fn new(answers: A) -> Self {
        Self { answers }
    }
}

impl PromptConfirm<Box<dyn AnswerSource>> {
    /// Ask on the terminal when both ends are attached, else read stdin.
    pub fn stdio() -> Self {
        let answers: Box<dyn AnswerSource> =
            if Term::stdout().is_term() && std::io::stdin().is_terminal() {
                Box::new(TerminalAnswer)
            } else {
                Box::new(LineAnswer::new(std::io::stdin().lock(), std::io::stdout()))
            };
        Self::new(answers)
    }
}

impl<A: AnswerSource> Confirm for PromptConfirm<A> {
    fn confirm(&mut self, preview: &Preview) -> Result<bool> {
        PreviewReport::new(preview).render(&mut TerminalOutput::new());

        let answer = self.answers.read_answer(PROMPT)?;
        tracing::debug!(?answer, "read confirmation");

        Ok(is_confirmation(&answer))
    }
}

/// Only the exact answer `y` confirms; `Y`, `yes` and empty input decline.
fn is_confirmation(answer: &str) -> bool {
    answer == CONFIRM_ANSWER
}
