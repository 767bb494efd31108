use anyhow::{Context, anyhow, bail};
use std::str::FromStr;
use sweeper_core::{Coord, Coord2, Difficulty};

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Click(Coord2),
    FlagMode,
    Restart(Option<Difficulty>),
    Show,
    Help,
    Quit,
}

pub(crate) const HELP: &str = "\
commands:
  r <row> <col>    reveal a cell
  f <row> <col>    flag or unflag a cell
  c <row> <col>    click, following flag mode
  m                toggle flag mode
  n [difficulty]   new game (easy, medium, hard)
  s                show the board
  h                this help
  q                quit";

fn parse_coords<'a>(mut words: impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let mut next = |name: &str| -> anyhow::Result<Coord> {
        let word = words.next().ok_or_else(|| anyhow!("missing {name}"))?;
        word.parse()
            .with_context(|| format!("invalid {name} {word:?}"))
    };
    let row = next("row")?;
    let col = next("column")?;
    Ok((row, col))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Self::Show);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words)?),
            "c" | "click" => Self::Click(parse_coords(&mut words)?),
            "m" | "mode" => Self::FlagMode,
            "n" | "new" | "restart" => Self::Restart(
                words
                    .next()
                    .map(str::parse::<Difficulty>)
                    .transpose()?,
            ),
            "s" | "show" => Self::Show,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?}, try h"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected {extra:?} after {verb}");
        }
        Ok(command)
    }
}
