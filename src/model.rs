//! Input records and query result rows.

use serde::{Deserialize, Serialize};

/// Student identifier, unique within the student table.
pub type StudentId = u64;

/// A row of the student table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// `StudentID` column.
    pub id: StudentId,
    /// Display name.
    pub name: String,
    /// `Interest1..Interest3`; `None` where the cell was missing.
    pub interests: [Option<String>; 3],
}

impl Student {
    /// Create a student; `None` marks a missing interest field.
    pub fn new(id: StudentId, name: impl Into<String>, interests: [Option<String>; 3]) -> Self {
        Self {
            id,
            name: name.into(),
            interests,
        }
    }
}

/// A row of the club table. Names are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    /// Club name; several rows may share one.
    #[serde(rename = "ClubName")]
    pub name: String,
    /// Single interest token describing the club's subject.
    #[serde(rename = "RelatedInterest")]
    pub related_interest: String,
}

impl Club {
    /// Create a club row.
    pub fn new(name: impl Into<String>, related_interest: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            related_interest: related_interest.into(),
        }
    }
}

/// One ranked row of a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Name of the recommended club.
    pub club_name: String,
    /// The club's subject token.
    pub related_interest: String,
    /// Occurrences of `related_interest` across the matched clusters' interests.
    pub frequency: usize,
}

/// A student together with the cluster label assigned at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudentCluster<'a> {
    /// Student id.
    pub id: StudentId,
    /// Display name.
    pub name: &'a str,
    /// Cluster label in `0..n_clusters`.
    pub cluster: usize,
}

/// A student whose interests contain a given club's subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterestedStudent<'a> {
    /// Student id.
    pub id: StudentId,
    /// Display name.
    pub name: &'a str,
    /// The student's three interest fields joined by spaces.
    pub combined_interests: &'a str,
}
