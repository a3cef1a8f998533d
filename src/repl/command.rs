//! Command Parsing
//!
//! Turns one input line into a typed command.

use crate::error::{PokedexError, Result};

/// Help table entry for one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub usage: &'static str,
    pub description: &'static str,
}

/// Every command the loop understands, in help order.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        usage: "help",
        description: "Prints the help menu",
    },
    CommandInfo {
        usage: "map",
        description: "Lists the next page of locations",
    },
    CommandInfo {
        usage: "mapb",
        description: "Lists the previous page of locations",
    },
    CommandInfo {
        usage: "explore {location}",
        description: "Lists the areas in a location",
    },
    CommandInfo {
        usage: "catch {pokemon}",
        description: "Attempts to catch a pokemon and add it to your pokedex",
    },
    CommandInfo {
        usage: "inspect {pokemon}",
        description: "Shows the details of a caught pokemon",
    },
    CommandInfo {
        usage: "pokedex",
        description: "Lists the pokemon you have caught",
    },
    CommandInfo {
        usage: "cache",
        description: "Shows response cache statistics",
    },
    CommandInfo {
        usage: "exit",
        description: "Turns off the pokedex",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    Cache,
    Exit,
}

impl Command {
    /// Parses a raw input line.
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match name.as_str() {
            "help" => no_args(Command::Help, args)?,
            "map" => no_args(Command::Map, args)?,
            "mapb" => no_args(Command::MapBack, args)?,
            "explore" => Command::Explore(one_arg("location", args)?),
            "catch" => Command::Catch(one_arg("pokemon name", args)?),
            "inspect" => Command::Inspect(one_arg("pokemon name", args)?),
            "pokedex" => no_args(Command::Pokedex, args)?,
            "cache" => no_args(Command::Cache, args)?,
            "exit" => Command::Exit,
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// Lowercases a line and splits it on whitespace.
pub fn clean_input(line: &str) -> Vec<String> {
    line.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn no_args(command: Command, args: &[String]) -> Result<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(PokedexError::UnexpectedArguments(args.join(" ")))
    }
}

fn one_arg(what: &'static str, args: &[String]) -> Result<String> {
    match args {
        [] => Err(PokedexError::MissingArgument(what)),
        [arg] => Ok(arg.clone()),
        _ => Err(PokedexError::UnexpectedArguments(args.join(" "))),
    }
}
