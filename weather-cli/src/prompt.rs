use std::{
    io::{BufRead, BufReader, Stdin, Stdout, Write},
    sync::mpsc as std_mpsc,
    thread,
};

use anyhow::{Context, Result};
use inquire::{InquireError, Text};
use tokio::sync::mpsc;

const PROMPT: &str = "Enter city name (or command):";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Line(String),
    /// Ctrl-C at the prompt.
    Interrupted,
    /// Input stream ended.
    Closed,
}

/// Source of user input lines.
pub trait LinePrompt: Send {
    fn read_line(&mut self) -> Result<PromptEvent>;
}

/// Interactive terminal prompt.
#[derive(Debug, Default)]
pub struct InquirePrompt;

impl LinePrompt for InquirePrompt {
    fn read_line(&mut self) -> Result<PromptEvent> {
        let answer = Text::new(PROMPT)
            .with_help_message("type 'help' for commands")
            .prompt();

        event_from_answer(answer)
    }
}

fn event_from_answer(answer: Result<String, InquireError>) -> Result<PromptEvent> {
    match answer {
        Ok(line) => Ok(PromptEvent::Line(line)),
        // Esc discards the current input and re-prompts.
        Err(InquireError::OperationCanceled) => Ok(PromptEvent::Line(String::new())),
        Err(InquireError::OperationInterrupted) => Ok(PromptEvent::Interrupted),
        Err(InquireError::NotTTY) => Ok(PromptEvent::Closed),
        Err(err) => Err(err).context("Failed to read input"),
    }
}

/// Plain line reader used when stdin is not a terminal (pipes, scripts).
#[derive(Debug)]
pub struct ReaderPrompt<R, W> {
    input: R,
    output: W,
}

impl ReaderPrompt<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R, W> ReaderPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R, W> LinePrompt for ReaderPrompt<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn read_line(&mut self) -> Result<PromptEvent> {
        write_prompt(&mut self.output)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read stdin")?;

        if read == 0 {
            Ok(PromptEvent::Closed)
        } else {
            Ok(PromptEvent::Line(line))
        }
    }
}

fn write_prompt(output: &mut impl Write) -> std::io::Result<()> {
    write!(output, "{PROMPT} ")?;
    output.flush()
}

/// Runs a [`LinePrompt`] on its own thread, one line per request, so the loop
/// can wait for input and for an interrupt at the same time.
#[derive(Debug)]
pub struct PromptReader {
    requests: std_mpsc::Sender<()>,
    events: mpsc::Receiver<Result<PromptEvent>>,
}

impl PromptReader {
    pub fn spawn(mut prompt: Box<dyn LinePrompt>) -> Result<Self> {
        let (requests, pending) = std_mpsc::channel::<()>();
        let (sender, events) = mpsc::channel(1);

        thread::Builder::new()
            .name("prompt".to_string())
            .spawn(move || {
                while pending.recv().is_ok() {
                    if sender.blocking_send(prompt.read_line()).is_err() {
                        break;
                    }
                }
            })
            .context("Failed to start input thread")?;

        Ok(Self { requests, events })
    }

    /// Prompt for one line and wait for the answer.
    pub async fn next_event(&mut self) -> Result<PromptEvent> {
        if self.requests.send(()).is_err() {
            return Ok(PromptEvent::Closed);
        }

        self.events.recv().await.unwrap_or(Ok(PromptEvent::Closed))
    }
}
