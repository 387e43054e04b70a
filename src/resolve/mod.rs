//! Outcome resolution for games whose log carries no explicit winner.
//!
//! Extraction never talks to an operator directly. It asks a
//! [`WinnerResolver`], and callers decide whether that means prompting a
//! human or answering with a fixed verdict.

use crate::model::record::Winner;
use std::io::{BufRead, BufReader, Stderr, Stdin, Write};

/// Decides the outcome of a game the log itself could not settle.
pub trait WinnerResolver {
    /// Resolve the outcome given the game's trailing lines and the two
    /// participant names.
    fn resolve(&mut self, context: &[String], player: &str, opponent: &str) -> Winner;
}

/// Answers every escalation with the same verdict. Suits unattended runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedResolver(pub Winner);

impl WinnerResolver for FixedResolver {
    fn resolve(&mut self, _context: &[String], _player: &str, _opponent: &str) -> Winner {
        self.0
    }
}

/// Asks an operator over a pair of streams, re-prompting until it gets a
/// valid answer. Exhausted input counts as an unknown outcome.
pub struct PromptResolver<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptResolver<R, W> {
    /// Build a resolver over arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptResolver<BufReader<Stdin>, Stderr> {
    /// Build a resolver over the process's terminal streams. Prompts go
    /// to stderr so stdout stays clean for the record output.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> WinnerResolver for PromptResolver<R, W> {
    fn resolve(&mut self, context: &[String], player: &str, opponent: &str) -> Winner {
        for line in context {
            let _ = writeln!(self.output, "{line}");
        }
        loop {
            let _ = writeln!(
                self.output,
                "Who won this game? (1-{player})(2-{opponent})(3-draw)(4-unknown)"
            );
            let _ = self.output.flush();

            let mut answer = String::new();
            match self.input.read_line(&mut answer) {
                Ok(0) | Err(_) => return Winner::Unknown,
                Ok(_) => {}
            }
            match answer.trim().chars().next() {
                Some('1') => return Winner::Player,
                Some('2') => return Winner::Opponent,
                Some('3') => return Winner::Draw,
                Some('4') => return Winner::Unknown,
                _ => {
                    let _ = writeln!(self.output, "Please see valid answers.");
                }
            }
        }
    }
}
