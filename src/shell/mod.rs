// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Interactive command shell over a [`Census`].
//!
//! The shell reads one command per line, echoes it after the prompt (so
//! piped transcripts read naturally) and writes results to its output.
//! End of input behaves like `q`.
//!
//! # Example
//!
//! ```
//! use distinct_arrays::array::ArrayParams;
//! use distinct_arrays::census::Census;
//! use distinct_arrays::shell::Shell;
//!
//! let census = Census::build(ArrayParams::new(3, 2).unwrap());
//! let mut output = Vec::new();
//! Shell::new(&census, "find 1,2,1\nq\n".as_bytes(), &mut output)
//!     .run()
//!     .unwrap();
//!
//! let transcript = String::from_utf8(output).unwrap();
//! assert!(transcript.contains("#2: [1,2,1]"));
//! ```

pub mod command;

pub use command::Command;

use crate::array::NormalizedArray;
use crate::census::Census;
use crate::registry::EquivalenceClass;
use std::fmt;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "Enter command (\"help\" for a list of commands, \"q\" to quit): ";

/// An array with its 1-based index, displayed as `#2: [1,2,1]`.
#[derive(Debug, Clone, Copy)]
pub struct Numbered<'a>(pub usize, pub &'a NormalizedArray);

impl fmt::Display for Numbered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}: {}", self.0, self.1)
    }
}

/// Write the two-line summary of a census.
pub fn write_summary<W: Write>(census: &Census, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "number of normalized arrays for {}: {}",
        census.params(),
        census.count()
    )?;
    writeln!(out, "equivalence classes: {}", census.count_distinct())
}

/// Command loop reading from `R` and writing to `W`.
#[derive(Debug)]
pub struct Shell<'a, R, W> {
    census: &'a Census,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(census: &'a Census, input: R, output: W) -> Self {
        Self {
            census,
            input,
            output,
        }
    }

    /// Run until `q`, an empty line or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line)?;
            let line = line.trim_end_matches(['\r', '\n']);
            writeln!(self.output, "{}", line)?;
            if read == 0 {
                return Ok(());
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => return Ok(()),
                Ok(command) => {
                    debug!(?command, "executing");
                    self.execute(&command)?;
                }
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    /// Execute one command. `Quit` does nothing here.
    pub fn execute(&mut self, command: &Command) -> io::Result<()> {
        match command {
            Command::Quit => Ok(()),
            Command::Help => {
                for (usage, description) in command::HELP {
                    writeln!(self.output, "{:>20}{}", usage, description)?;
                }
                Ok(())
            }
            Command::Result => write_summary(self.census, &mut self.output),
            Command::All => {
                for (index, array) in self.census.arrays() {
                    writeln!(self.output, "{}", Numbered(index, array))?;
                }
                Ok(())
            }
            Command::ListClasses => {
                for class in self.census.registry().classes() {
                    self.write_class(class)?;
                }
                Ok(())
            }
            Command::Class(index) => match self.census.class_of(*index) {
                Some(class) => self.write_class(class),
                None => self.not_found(*index),
            },
            Command::Diff(left, right) => self.diff(*left, *right),
            Command::Find(symbols) => {
                let census = self.census;
                let found = census
                    .find(symbols)
                    .and_then(|index| census.array(index).map(|array| (index, array)));
                match found {
                    Some((index, array)) => writeln!(self.output, "{}", Numbered(index, array)),
                    None => writeln!(self.output, "array not found!"),
                }
            }
            Command::Unknown(_) => writeln!(self.output, "unknown command"),
        }
    }

    fn not_found(&mut self, index: usize) -> io::Result<()> {
        writeln!(self.output, "array #{} not found", index)
    }

    fn write_class(&mut self, class: &EquivalenceClass) -> io::Result<()> {
        writeln!(self.output, "{{")?;
        for &index in class.members() {
            if let Some(array) = self.census.array(index) {
                writeln!(self.output, "\t{}", Numbered(index, array))?;
            }
        }
        writeln!(self.output, "}}")
    }

    fn diff(&mut self, left: usize, right: usize) -> io::Result<()> {
        let census = self.census;
        let (Some(left_array), Some(right_array)) = (census.array(left), census.array(right))
        else {
            let missing = if census.array(left).is_none() { left } else { right };
            return self.not_found(missing);
        };
        let Some(diff) = census.diff(left, right) else {
            return self.not_found(left);
        };

        writeln!(self.output, "X = {}", Numbered(left, left_array))?;
        writeln!(self.output, "Y = {}", Numbered(right, right_array))?;

        if diff.is_equivalent() {
            return writeln!(self.output, "\tthe arrays are equivalent!");
        }
        for disagreement in &diff.disagreements {
            writeln!(
                self.output,
                "\tdifferent result for [{},{}] ({} for X, {} for Y)",
                disagreement.start + 1,
                disagreement.end + 1,
                u8::from(disagreement.left),
                u8::from(disagreement.right)
            )?;
        }
        Ok(())
    }
}
