use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0, multispace1},
    combinator::map,
    multi::separated_list0,
    sequence::{delimited, preceded},
};

use crate::probe::table::ProbingTable;

/// One action against the table, decoded from an input token: the first
/// character selects the operation, the rest is the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Delete(String),
}

impl Command {
    pub fn key(&self) -> &str {
        match self {
            Self::Add(key) | Self::Delete(key) => key,
        }
    }
}

/// Parses a line of whitespace-separated command tokens, e.g.
/// `"Aapple Aorange Dapple"`. Keys are validated here (non-empty, ascii
/// lowercase), so commands that parse always satisfy the table's key contract.
pub fn parse_line(input: &str) -> anyhow::Result<Vec<Command>> {
    let (remaining, commands) =
        command_line(input).map_err(|e| anyhow::anyhow!("Parse error: {}", e))?;
    if !remaining.is_empty() {
        anyhow::bail!("unrecognized token near {:?}", remaining);
    }
    Ok(commands)
}

pub fn apply(table: &mut ProbingTable, commands: &[Command]) -> anyhow::Result<()> {
    for command in commands {
        match command {
            Command::Add(key) => {
                table.add(key)?;
            }
            Command::Delete(key) => {
                table.delete(key)?;
            }
        }
    }
    Ok(())
}

fn command_line(input: &str) -> IResult<&str, Vec<Command>> {
    delimited(
        multispace0,
        separated_list0(multispace1, command_token),
        multispace0,
    )(input)
}

fn command_token(input: &str) -> IResult<&str, Command> {
    alt((
        map(preceded(char('A'), key), |k: &str| Command::Add(k.to_string())),
        map(preceded(char('D'), key), |k: &str| Command::Delete(k.to_string())),
    ))(input)
}

fn key(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_lowercase())(input)
}
