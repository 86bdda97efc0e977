use std::collections::HashMap;

use chroma_common::{Palette, VoteRecord};
use serde::Serialize;

/// Votes for one palette option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionTally {
    pub name: String,
    pub votes: u64,
    /// Share of `total_votes`, rounded half-up to a whole percent.
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leader {
    pub name: String,
    pub votes: u64,
}

/// Point-in-time aggregation of the vote records. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallySnapshot {
    /// One row per palette option, in palette order, zeros included.
    pub options: Vec<OptionTally>,
    pub total_votes: u64,
    /// `None` until at least one vote has been counted.
    pub leader: Option<Leader>,
}

impl TallySnapshot {
    /// The snapshot for a store with no records.
    pub fn empty(palette: &Palette) -> Self {
        compute(&[], palette)
    }

    pub fn count(&self, name: &str) -> Option<u64> {
        self.row(name).map(|r| r.votes)
    }

    pub fn percentage(&self, name: &str) -> Option<u8> {
        self.row(name).map(|r| r.percentage)
    }

    pub fn counts_by_option(&self) -> HashMap<&str, u64> {
        self.options
            .iter()
            .map(|r| (r.name.as_str(), r.votes))
            .collect()
    }

    pub fn leader_name(&self) -> Option<&str> {
        self.leader.as_ref().map(|l| l.name.as_str())
    }

    fn row(&self, name: &str) -> Option<&OptionTally> {
        self.options.iter().find(|r| r.name == name)
    }
}

/// Aggregates `records` against `palette`.
///
/// Records whose option name is not in the palette are not counted. The
/// result does not depend on record order. Ties for the lead go to the option
/// listed first in the palette.
pub fn compute(records: &[VoteRecord], palette: &Palette) -> TallySnapshot {
    let index: HashMap<&str, usize> = palette
        .iter()
        .enumerate()
        .map(|(i, o)| (o.name.as_str(), i))
        .collect();

    let mut counts = vec![0u64; palette.len()];
    for record in records {
        if let Some(&i) = index.get(record.option_name.as_str()) {
            counts[i] += 1;
        }
    }

    let total_votes: u64 = counts.iter().sum();

    let mut leader: Option<(usize, u64)> = None;
    if total_votes > 0 {
        for (i, &votes) in counts.iter().enumerate() {
            match leader {
                Some((_, best)) if votes <= best => {}
                _ => leader = Some((i, votes)),
            }
        }
    }

    let options = palette
        .iter()
        .zip(&counts)
        .map(|(option, &votes)| OptionTally {
            name: option.name.clone(),
            votes,
            percentage: percentage(votes, total_votes),
        })
        .collect();

    TallySnapshot {
        options,
        total_votes,
        leader: leader.map(|(i, votes)| Leader {
            name: palette.options()[i].name.clone(),
            votes,
        }),
    }
}

/// `round(count / total * 100)`, half-up, in integer arithmetic. Zero when
/// there are no votes.
pub fn percentage(count: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let (count, total) = (count as u128, total as u128);
    ((count * 200 + total) / (total * 2)).min(100) as u8
}
