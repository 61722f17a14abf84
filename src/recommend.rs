//! Cluster-driven club recommendations.
//!
//! A query names some students. Their clusters are resolved, every student in
//! those clusters (not only the queried ones) contributes their combined
//! interests to one token stream, and clubs are ranked by how often their
//! related interest occurs in that stream.
//!
//! Ranking: frequency descending, then club name ascending, then related
//! interest ascending. Clubs whose interest never occurs are left out.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use log::debug;

use crate::error::{Error, Result};
use crate::model::{InterestedStudent, Recommendation, StudentId};
use crate::snapshot::Snapshot;
use crate::text;

impl Snapshot {
    /// Rank clubs for the clusters of `student_ids`.
    ///
    /// Returns [`Error::EmptyQuery`] when `student_ids` is empty. Unknown ids are
    /// skipped; a query made only of unknown ids yields no recommendations.
    pub fn try_recommend(&self, student_ids: &[StudentId]) -> Result<Vec<Recommendation>> {
        if student_ids.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let mut clusters = HashSet::new();
        for &id in student_ids {
            match self.cluster_of(id) {
                Some(c) => {
                    clusters.insert(c);
                }
                None => debug!("ignoring unknown student id {id}"),
            }
        }
        if clusters.is_empty() {
            return Ok(Vec::new());
        }

        let counts = text::histogram(
            self.rows_in_clusters(&clusters)
                .map(|row| self.combined_at(row)),
        );

        let mut ranked: Vec<Recommendation> = self
            .clubs()
            .iter()
            .filter_map(|club| {
                counts
                    .get(club.related_interest.as_str())
                    .map(|&frequency| Recommendation {
                        club_name: club.name.clone(),
                        related_interest: club.related_interest.clone(),
                        frequency,
                    })
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.club_name.cmp(&b.club_name))
                .then_with(|| a.related_interest.cmp(&b.related_interest))
        });

        debug!(
            "recommend: {} ids -> clusters {:?} -> {} clubs",
            student_ids.len(),
            clusters,
            ranked.len()
        );
        Ok(ranked)
    }

    /// Like [`try_recommend`](Self::try_recommend), but an empty query yields an
    /// empty list instead of an error.
    pub fn recommend(&self, student_ids: &[StudentId]) -> Vec<Recommendation> {
        match self.try_recommend(student_ids) {
            Ok(ranked) => ranked,
            Err(e) => {
                debug!("recommend: {e}");
                Vec::new()
            }
        }
    }

    /// Token histogram of the selected students' own interests, count descending
    /// then token ascending. Cluster membership plays no part here.
    pub fn interest_distribution(&self, student_ids: &[StudentId]) -> Vec<(String, usize)> {
        let mut rows: Vec<usize> = student_ids.iter().filter_map(|&id| self.row_of(id)).collect();
        rows.sort_unstable();
        rows.dedup();

        let counts: HashMap<&str, usize> =
            text::histogram(rows.into_iter().map(|row| self.combined_at(row)));
        let mut out: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(token, n)| (token.to_string(), n))
            .collect();
        by_count_then_key(&mut out);
        out
    }

    /// Students whose interests contain, as a whole token, the related interest of
    /// any club named `club_name`. Table order.
    pub fn students_interested_in(&self, club_name: &str) -> Vec<InterestedStudent<'_>> {
        let interests: HashSet<&str> = self
            .clubs()
            .iter()
            .filter(|c| c.name == club_name)
            .map(|c| c.related_interest.as_str())
            .collect();
        if interests.is_empty() {
            debug!("no club named {club_name:?}");
            return Vec::new();
        }

        (0..self.len())
            .filter(|&row| {
                let combined = self.combined_at(row);
                interests.iter().any(|i| text::contains_token(combined, i))
            })
            .map(|row| {
                let student = self.student_at(row);
                InterestedStudent {
                    id: student.id,
                    name: &student.name,
                    combined_interests: self.combined_at(row),
                }
            })
            .collect()
    }

    /// Ids of the students in `cluster`, in table order.
    pub fn members_of(&self, cluster: usize) -> Vec<StudentId> {
        let wanted: HashSet<usize> = [cluster].into_iter().collect();
        self.rows_in_clusters(&wanted)
            .map(|row| self.student_at(row).id)
            .collect()
    }
}

/// Sort helper shared with the analytics reports: count descending, key ascending.
pub(crate) fn by_count_then_key<K: Ord>(entries: &mut [(K, usize)]) {
    entries.sort_by(|a, b| (Reverse(a.1), &a.0).cmp(&(Reverse(b.1), &b.0)));
}
