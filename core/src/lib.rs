mod display;
mod engine;

pub mod document;
pub mod input;

pub use display::{DisplayList, DisplayPercent};
pub use engine::{
    beat_relationship, find_cycles, lost_relationship, matchup, tooltips, Cycle, Matchup,
    Relationships,
};

use std::collections::BTreeMap;

/*****************************************************************************************
 * Error Types
 */

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    NoDice,
    TooManyDice { count: usize },
    EmptyDie,
    InvalidPlayers { players: usize },
    MalformedLine { line: usize, text: String },
    SerializationError(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoDice => write!(f, "No dice data found"),
            Error::TooManyDice { count } => {
                write!(f, "Found {count} dice but only {MAX_DICE} can be labelled")
            }
            Error::EmptyDie => write!(f, "A die must have at least one face"),
            Error::InvalidPlayers { players } => {
                write!(f, "Players must be at least 1, got {players}")
            }
            Error::MalformedLine { line, text } => {
                write!(
                    f,
                    "Line {line} is not a comma-separated list of integers: {text:?}"
                )
            }
            Error::SerializationError(inner) => {
                write!(f, "Failed to serialize dice set: {inner}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SerializationError(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(inner: serde_json::Error) -> Self {
        Self::SerializationError(inner)
    }
}

/*****************************************************************************************
 * Common Types / Constants
 */

/// One label per letter of the alphabet
pub const MAX_DICE: usize = 26;

/// Dice are named by position, first die is `A`, second `B` and so on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(u8);

impl Label {
    pub fn nth(index: usize) -> Option<Self> {
        (index < MAX_DICE).then(|| Label(b'A' + index as u8))
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }
}

impl serde::Serialize for Label {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// The face values of a single die, kept in input order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Die(Vec<i64>);

impl Die {
    pub fn new(faces: Vec<i64>) -> Result<Self> {
        if faces.is_empty() {
            return Err(Error::EmptyDie);
        }
        Ok(Self(faces))
    }

    pub fn faces(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // never true, see `Die::new`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceSet {
    dice: BTreeMap<Label, Die>,
    players: usize,
}

impl DiceSet {
    pub fn new(dice: BTreeMap<Label, Die>, players: usize) -> Result<Self> {
        if dice.is_empty() {
            return Err(Error::NoDice);
        }
        if players == 0 {
            return Err(Error::InvalidPlayers { players });
        }
        Ok(Self { dice, players })
    }

    /// Labels the dice by position
    pub fn from_dice(dice: Vec<Die>, players: usize) -> Result<Self> {
        let count = dice.len();
        let dice = dice
            .into_iter()
            .enumerate()
            .map(|(index, die)| {
                let label = Label::nth(index).ok_or(Error::TooManyDice { count })?;
                Ok((label, die))
            })
            .collect::<Result<_>>()?;
        Self::new(dice, players)
    }

    pub fn players(&self) -> usize {
        self.players
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn get(&self, label: Label) -> Option<&Die> {
        self.dice.get(&label)
    }

    /// Labels in alphabetical order
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.dice.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Label, &Die)> {
        self.dice.iter().map(|(label, die)| (*label, die))
    }

    pub fn dice(&self) -> &BTreeMap<Label, Die> {
        &self.dice
    }
}
