use crate::{DiceSet, Die, DisplayPercent, Label};
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};

/// Result of rolling `a` against `b` over every pair of faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup {
    pub wins: u64,
    pub losses: u64,
    pub ties: u64,
    pub total: u64,
}

impl Matchup {
    /// `a` beats `b` when it wins more of the face pairs than it loses.
    ///
    /// Both rates share the |a|·|b| denominator so comparing the counts is the exact
    /// cross-multiplied comparison, equal rates (including all ties) beat neither way.
    pub fn beats(&self) -> bool {
        self.wins > self.losses
    }

    /// Swaps the point of view, `matchup(a, b).reverse() == matchup(b, a)`
    pub fn reverse(self) -> Self {
        Self {
            wins: self.losses,
            losses: self.wins,
            ..self
        }
    }

    pub fn win_rate(&self) -> f64 {
        self.wins as f64 / self.total as f64
    }

    pub fn loss_rate(&self) -> f64 {
        self.losses as f64 / self.total as f64
    }

    pub fn tie_rate(&self) -> f64 {
        self.ties as f64 / self.total as f64
    }

    /// Only used for display, never for deciding who beats whom
    pub fn win_percentage(&self) -> DisplayPercent {
        DisplayPercent(self.win_rate() * 100.0)
    }
}

pub fn matchup(a: &Die, b: &Die) -> Matchup {
    let mut wins = 0;
    let mut losses = 0;
    let mut ties = 0;
    for x in a.faces() {
        for y in b.faces() {
            match x.cmp(y) {
                std::cmp::Ordering::Greater => wins += 1,
                std::cmp::Ordering::Less => losses += 1,
                std::cmp::Ordering::Equal => ties += 1,
            }
        }
    }
    Matchup {
        wins,
        losses,
        ties,
        total: a.len() as u64 * b.len() as u64,
    }
}

/// For each die the dice it beats, every die gets an entry even if it beats nothing
pub fn beat_relationship(set: &DiceSet) -> BTreeMap<Label, Vec<Label>> {
    set.iter()
        .map(|(label, die)| {
            let beaten = set
                .iter()
                .filter(|(other, _)| *other != label)
                .filter(|(other, other_die)| {
                    let result = matchup(die, other_die);
                    log::debug!(
                        "{label} v {other}: {}/{} wins, {} losses, tie rate {:.3}",
                        result.wins,
                        result.total,
                        result.losses,
                        result.tie_rate()
                    );
                    result.beats()
                })
                .map(|(other, _)| other)
                .collect();
            (label, beaten)
        })
        .collect()
}

fn beaten_by<'a>(beats: &'a BTreeMap<Label, Vec<Label>>, label: &Label) -> &'a [Label] {
    beats.get(label).map(Vec::as_slice).unwrap_or_default()
}

/// For every group of `players - 1` dice, the dice that beat each member of the group.
///
/// Keys are the concatenated labels of the group. Nothing is returned for single player sets or
/// when there are at least as many players as dice.
pub fn lost_relationship(
    set: &DiceSet,
    beats: &BTreeMap<Label, Vec<Label>>,
) -> BTreeMap<String, Vec<Label>> {
    let players = set.players();
    if players <= 1 || players >= set.len() {
        return BTreeMap::new();
    }

    let labels: Vec<Label> = set.labels().collect();
    // labels are sorted so the groups come out in lexicographic order
    labels
        .iter()
        .copied()
        .combinations(players - 1)
        .map(|group| {
            let key: String = group.iter().map(|label| label.as_char()).collect();

            let winners: Vec<Label> = labels
                .iter()
                .copied()
                .filter(|label| !group.contains(label))
                .filter(|label| {
                    let beaten = beaten_by(beats, label);
                    group.iter().all(|member| beaten.contains(member))
                })
                .collect();

            log::debug!("group {key} loses to {winners:?}");
            (key, winners)
        })
        .collect()
}

/// One sentence per beat relation, keyed `"X-Y"`
pub fn tooltips(set: &DiceSet, beats: &BTreeMap<Label, Vec<Label>>) -> BTreeMap<String, String> {
    let mut tooltips = BTreeMap::new();
    for (winner, beaten) in beats {
        let Some(winner_die) = set.get(*winner) else {
            continue;
        };
        for loser in beaten {
            let Some(loser_die) = set.get(*loser) else {
                continue;
            };
            let percentage = matchup(winner_die, loser_die).win_percentage();
            tooltips.insert(
                format!("{winner}-{loser}"),
                format!("Die {winner} beats Die {loser} about {percentage}% of the time"),
            );
        }
    }
    tooltips
}

/// Three dice that beat each other in a circle: `x` beats `y`, `y` beats `z` and `z` beats `x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cycle([Label; 3]);

impl Cycle {
    /// Rotates so the smallest label comes first, the direction is kept
    pub fn new(x: Label, y: Label, z: Label) -> Self {
        let mut labels = [x, y, z];
        let smallest = (0..3).min_by_key(|&i| labels[i]).unwrap_or(0);
        labels.rotate_left(smallest);
        Self(labels)
    }

    pub fn labels(&self) -> [Label; 3] {
        self.0
    }
}

/// Every distinct three-die cycle in the beat relation, sorted
pub fn find_cycles(beats: &BTreeMap<Label, Vec<Label>>) -> Vec<Cycle> {
    let mut cycles = BTreeSet::new();
    for (x, beaten) in beats {
        for y in beaten {
            for z in beaten_by(beats, y) {
                if z != x && beaten_by(beats, z).contains(x) {
                    cycles.insert(Cycle::new(*x, *y, *z));
                }
            }
        }
    }
    cycles.into_iter().collect()
}

/// Everything derived from a dice set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationships {
    pub beats: BTreeMap<Label, Vec<Label>>,
    pub lost: BTreeMap<String, Vec<Label>>,
    pub tooltips: BTreeMap<String, String>,
    pub cycles: Vec<Cycle>,
}

impl Relationships {
    pub fn compute(set: &DiceSet) -> Self {
        let beats = beat_relationship(set);
        let lost = lost_relationship(set, &beats);
        let tooltips = tooltips(set, &beats);
        let cycles = find_cycles(&beats);
        log::info!(
            "{} dice, {} beat relations, {} groups, {} cycles",
            set.len(),
            tooltips.len(),
            lost.len(),
            cycles.len()
        );
        Self {
            beats,
            lost,
            tooltips,
            cycles,
        }
    }

    pub fn is_intransitive(&self) -> bool {
        !self.cycles.is_empty()
    }
}
