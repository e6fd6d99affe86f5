//! Command execution for one-shot queries and the interactive session.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{Query, Settings};
use crate::state::GraphSlot;
use crate::{degree, friends, generation, load, path, show, status};

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(name = "socialgraph", no_binary_name = true)]
#[command(disable_version_flag = true, disable_help_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    #[command(flatten)]
    Query(Query),
    /// Reload the graph from the source file
    Reload,
    /// Leave the session
    #[command(alias = "quit")]
    Exit,
}

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session {
    settings: Settings,
    slot: GraphSlot,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            slot: GraphSlot::default(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.is_loaded()
    }

    /// Load (or reload) the graph from the configured source file.
    ///
    /// On failure the previously loaded graph, if any, stays in place.
    pub fn reload(&mut self) -> Result<()> {
        let state = load::load_graph(&self.settings)?;
        self.slot.set_graph(state);
        Ok(())
    }

    /// Run one query against the loaded graph.
    pub fn execute(&mut self, query: &Query, out: &mut impl Write) -> Result<()> {
        if let Err(e) = generation::ensure_fresh(&mut self.slot, &self.settings) {
            tracing::warn!(error = %format!("{e:#}"), "auto-reload failed, keeping loaded graph");
        }

        let json = self.settings.json;
        let default_algorithm = self.settings.algorithm;
        self.slot.with_graph(|gs| match *query {
            Query::Friends { id } => friends::run(gs, id, json, out),
            Query::Path { from, to, algorithm } => path::run(
                gs,
                from,
                to,
                algorithm.unwrap_or(default_algorithm),
                json,
                out,
            ),
            Query::Show => show::run(gs, json, out),
            Query::Status => status::run(gs, json, out),
            Query::Top { n } => degree::run(gs, n, json, out),
        })
    }

    /// Handle one input line. Errors are printed and never end the session.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let parsed = match SessionLine::try_parse_from(words.iter().copied()) {
            Ok(parsed) => parsed,
            Err(e) => {
                write!(out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        let outcome = match parsed.command {
            SessionCommand::Exit => return Ok(Flow::Exit),
            SessionCommand::Reload => self
                .reload()
                .and_then(|()| writeln!(out, "Graph reloaded.").map_err(Into::into)),
            SessionCommand::Query(query) => self.execute(&query, out),
        };

        if let Err(e) = outcome {
            tracing::debug!(line, "command failed");
            writeln!(out, "error: {e:#}")?;
        }
        Ok(Flow::Continue)
    }

    /// Read commands from `input` until end of input or `exit`.
    pub fn interactive(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        if self.is_loaded() {
            writeln!(
                out,
                "Loaded '{}' as an adjacency {}.",
                self.settings.source.display(),
                self.settings.representation
            )?;
        }
        writeln!(out, "Type 'help' for commands.")?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            if self.handle_line(&line?, out)? == Flow::Exit {
                break;
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }
}
