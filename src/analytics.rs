//! Read-only reports over the club table.
//!
//! Neither report looks at students. "Popularity buckets" group interests by how
//! many clubs share them; they are a presentation grouping, not a clustering, and
//! bucket labels have nothing to do with student cluster labels.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::Club;
use crate::recommend::by_count_then_key;
use crate::snapshot::Snapshot;

/// An interest, its club count, and the bucket of interests sharing that count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularityBucket {
    /// Interest token shared by the counted clubs.
    pub related_interest: String,
    /// Number of clubs declaring this interest.
    pub count: usize,
    /// Rank of `count` among the distinct counts, ascending from 0.
    pub bucket: usize,
}

/// One row of the demand leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemandEntry {
    /// Interest token shared by the counted clubs.
    pub related_interest: String,
    /// Number of clubs declaring this interest.
    pub demand: usize,
}

fn clubs_per_interest(clubs: &[Club]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for club in clubs {
        *counts.entry(club.related_interest.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Group interests by club count. Rows are ordered by interest ascending.
pub fn club_pseudo_clusters(clubs: &[Club]) -> Vec<PopularityBucket> {
    let counts = clubs_per_interest(clubs);

    let mut distinct: Vec<usize> = counts.values().copied().collect();
    distinct.sort_unstable();
    distinct.dedup();

    counts
        .into_iter()
        .map(|(interest, count)| PopularityBucket {
            related_interest: interest.to_string(),
            count,
            // `count` was taken from `distinct`, so the search always hits.
            bucket: distinct.binary_search(&count).unwrap_or_default(),
        })
        .collect()
}

/// Interests ranked by number of clubs, descending; ties by interest ascending.
pub fn club_leaderboard(clubs: &[Club]) -> Vec<DemandEntry> {
    let mut entries: Vec<(&str, usize)> = clubs_per_interest(clubs).into_iter().collect();
    by_count_then_key(&mut entries);
    entries
        .into_iter()
        .map(|(interest, demand)| DemandEntry {
            related_interest: interest.to_string(),
            demand,
        })
        .collect()
}

impl Snapshot {
    /// [`club_pseudo_clusters`] over this snapshot's clubs.
    pub fn club_pseudo_clusters(&self) -> Vec<PopularityBucket> {
        club_pseudo_clusters(self.clubs())
    }

    /// [`club_leaderboard`] over this snapshot's clubs.
    pub fn club_leaderboard(&self) -> Vec<DemandEntry> {
        club_leaderboard(self.clubs())
    }
}
