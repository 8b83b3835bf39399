//! The JSON record handed to the dice set viewer

use crate::{DiceSet, Die, Label, Relationships, Result};
use serde::Serialize;
use std::{collections::BTreeMap, io, path::Path};

pub const INTRANSITIVE_NOTE: &str = "This set demonstrates intransitivity - where relationships \
    between dice form cycles rather than a linear hierarchy.";
pub const HIERARCHY_NOTE: &str =
    "The relationships between these dice form a hierarchy rather than intransitive cycles.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceSetDocument {
    pub name: String,
    pub players: usize,
    pub dice_count: usize,
    pub dice: BTreeMap<Label, Die>,
    pub beat_relationship: BTreeMap<Label, Vec<Label>>,
    pub lost_relationship: BTreeMap<String, Vec<Label>>,
    pub info: String,
    pub tooltips: BTreeMap<String, String>,
}

impl DiceSetDocument {
    pub fn new(name: String, set: &DiceSet, relationships: Relationships) -> Self {
        let info = info(set.len(), &relationships);
        Self {
            name,
            players: set.players(),
            dice_count: set.len(),
            dice: set.dice().clone(),
            beat_relationship: relationships.beats,
            lost_relationship: relationships.lost,
            info,
            tooltips: relationships.tooltips,
        }
    }
}

pub fn info(dice_count: usize, relationships: &Relationships) -> String {
    let note = if relationships.is_intransitive() {
        INTRANSITIVE_NOTE
    } else {
        HIERARCHY_NOTE
    };
    format!(
        "<p>A custom set of {dice_count} dice with calculated relationships between each die.</p>\
         <p>{note}</p>"
    )
}

/// `some_dice.txt` becomes `some_dice`
pub fn default_set_key(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `grime_dice.txt` becomes `Grime Dice Dice`
pub fn display_name(path: &Path) -> String {
    format!("{} Dice", title_case(&default_set_key(path).replace('_', " ")))
}

// upper case the first letter of every run of letters, lower case the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Writes `{ "<set_key>": document }` indented by four spaces
pub fn write_json<W>(writer: W, set_key: &str, document: &DiceSetDocument) -> Result<()>
where
    W: io::Write,
{
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    let mut root = BTreeMap::new();
    root.insert(set_key, document);
    root.serialize(&mut serializer)?;
    Ok(())
}

pub fn to_json(set_key: &str, document: &DiceSetDocument) -> Result<String> {
    let mut buffer = Vec::new();
    write_json(&mut buffer, set_key, document)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
