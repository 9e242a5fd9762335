//! The interactive read-eval-print loop.

use std::{io::Write, pin::Pin};

use anyhow::Result;
use colored::Colorize;
use tracing::{debug, info, warn};

use crate::{
    command::Command,
    display,
    prompt::{PromptEvent, PromptReader},
    session::Session,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

type Interrupt = Pin<Box<dyn Future<Output = ()>>>;

pub struct Repl<W: Write> {
    session: Session,
    input: PromptReader,
    /// One listener for the whole run, shared by the prompt and the lookup.
    interrupt: Interrupt,
    out: W,
}

impl<W: Write> Repl<W> {
    pub fn new(session: Session, input: PromptReader, out: W) -> Self {
        Self {
            session,
            input,
            interrupt: Box::pin(ctrl_c()),
            out,
        }
    }

    #[cfg(test)]
    pub fn with_interrupt(mut self, interrupt: impl Future<Output = ()> + 'static) -> Self {
        self.interrupt = Box::pin(interrupt);
        self
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until quit, interrupt or end of input. Per-command failures are
    /// reported and the loop carries on.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let event = tokio::select! {
                event = self.input.next_event() => event,
                () = &mut self.interrupt => Ok(PromptEvent::Interrupted),
            };

            let event = match event {
                Ok(event) => event,
                Err(err) => {
                    writeln!(self.out, "{}", format!("Error: {err:#}").red())?;
                    PromptEvent::Closed
                }
            };

            let flow = match event {
                PromptEvent::Line(line) => self.step(&line).await,
                PromptEvent::Interrupted => {
                    info!("interrupted at prompt");
                    Ok(Flow::Quit)
                }
                PromptEvent::Closed => Ok(Flow::Quit),
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => {
                    let msg = format!("An unexpected error occurred: {err:#}");
                    writeln!(self.out, "{}", msg.red())?;
                }
            }
        }

        writeln!(self.out, "{}", display::FAREWELL.green())?;
        self.out.flush()?;
        Ok(())
    }

    async fn step(&mut self, line: &str) -> Result<Flow> {
        match Command::parse(line) {
            Command::Empty => Ok(Flow::Continue),
            Command::Quit => Ok(Flow::Quit),
            Command::Help => {
                writeln!(self.out, "{}", display::HELP_TEXT)?;
                Ok(Flow::Continue)
            }
            Command::Units(value) => {
                match self.session.set_units(&value) {
                    Ok(units) => {
                        debug!(%units, "units changed");
                        let msg = format!("Temperature units set to {}", units.display_name());
                        writeln!(self.out, "{}", msg.green())?;
                    }
                    Err(err) => writeln!(self.out, "{}", format!("Error: {err}").red())?,
                }
                Ok(Flow::Continue)
            }
            Command::Lookup(city) => self.lookup(&city).await,
        }
    }

    async fn lookup(&mut self, city: &str) -> Result<Flow> {
        let msg = format!("Fetching weather data for {city}...");
        writeln!(self.out, "{}", msg.yellow())?;
        self.out.flush()?;

        let result = tokio::select! {
            result = self.session.lookup(city) => result,
            () = &mut self.interrupt => {
                info!(city, "interrupted while waiting for the weather service");
                return Ok(Flow::Quit);
            }
        };

        let text = display::format_result(&result, self.session.units());
        writeln!(self.out, "{}", display::paint(&result, &text))?;
        Ok(Flow::Continue)
    }
}

async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
