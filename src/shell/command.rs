// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shell command parsing.

use crate::array::parse_literal;
use crate::error::CommandError;
use std::str::FromStr;

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `q`, `quit` or an empty line.
    Quit,
    Help,
    /// Print the array and class counts.
    Result,
    /// Print every array.
    All,
    /// `eq`: print every equivalence class.
    ListClasses,
    /// `eq <X>`: print the class of array #X.
    Class(usize),
    /// `diff <X> <Y>`
    Diff(usize, usize),
    /// `find <ARRAY>`, holding 0-based symbols.
    Find(Vec<u8>),
    Unknown(String),
}

/// (usage, description) pairs for `help`.
pub const HELP: &[(&str, &str)] = &[
    ("help: ", "show this help"),
    ("result: ", "show main result"),
    ("all: ", "print all arrays"),
    ("diff <X> <Y>: ", "compare arrays #<X> and #<Y>"),
    ("eq: ", "list all equivalence classes"),
    ("eq <X>: ", "list equivalence class that #<X> belongs to"),
    ("find <ARRAY>: ", "find the given array"),
    ("q: ", "quit"),
];

fn parse_index(token: Option<&str>, usage: &'static str) -> Result<usize, CommandError> {
    let token = token.ok_or(CommandError::MissingArgument { usage })?;
    token.parse().map_err(|_| CommandError::InvalidIndex {
        token: token.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let mut args = rest.split_whitespace();

        let command = match word {
            "" | "q" | "quit" => Command::Quit,
            "help" => Command::Help,
            "result" => Command::Result,
            "all" => Command::All,
            "eq" if rest.trim().is_empty() => Command::ListClasses,
            "eq" => Command::Class(parse_index(args.next(), "eq <X>")?),
            "diff" => {
                let left = parse_index(args.next(), "diff <X> <Y>")?;
                let right = parse_index(args.next(), "diff <X> <Y>")?;
                Command::Diff(left, right)
            }
            "find" if rest.trim().is_empty() => {
                return Err(CommandError::MissingArgument {
                    usage: "find <ARRAY>",
                })
            }
            "find" => Command::Find(parse_literal(rest)?),
            _ => Command::Unknown(line.to_string()),
        };
        Ok(command)
    }
}
