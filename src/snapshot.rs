//! The immutable model built once at startup.
//!
//! [`Snapshot::build`] runs the whole batch pass (combine, vectorize, cluster) and
//! either returns a complete model or an error; there is no partially built state.
//! Every query afterwards takes `&Snapshot` and never mutates it, so a snapshot
//! can be shared freely between readers.

use std::collections::{HashMap, HashSet};

use log::{debug, info};

use crate::config::RecommenderConfig;
use crate::error::{Error, Result};
use crate::model::{Club, Student, StudentCluster, StudentId};
use crate::text::{self, TermCounts, Vocabulary};

/// Students, clubs, and the cluster assignment derived from them.
#[derive(Debug, Clone)]
pub struct Snapshot {
    students: Vec<Student>,
    combined: Vec<String>,
    labels: Vec<usize>,
    index: HashMap<StudentId, usize>,
    clubs: Vec<Club>,
    vocabulary: Vocabulary,
    vectors: Vec<TermCounts>,
    n_clusters: usize,
    inertia: f32,
}

impl Snapshot {
    /// Vectorize and cluster `students`.
    ///
    /// Fails on an empty or duplicate-keyed student table, on an invalid
    /// configuration (see [`RecommenderConfig::validate`]), and when `n_clusters`
    /// exceeds the number of distinct interest vectors.
    pub fn build(
        students: Vec<Student>,
        clubs: Vec<Club>,
        config: &RecommenderConfig,
    ) -> Result<Self> {
        if students.is_empty() {
            return Err(Error::EmptyInput);
        }
        config.validate(students.len())?;

        let mut index = HashMap::with_capacity(students.len());
        for (row, student) in students.iter().enumerate() {
            if index.insert(student.id, row).is_some() {
                return Err(Error::DuplicateStudentId(student.id));
            }
        }

        let combined: Vec<String> = students
            .iter()
            .map(|s| text::combine(s, &config.missing_placeholder))
            .collect();

        let (vocabulary, vectors) = text::fit_transform(&combined);
        info!(
            "vectorized {} students over {} interest tokens",
            students.len(),
            vocabulary.len()
        );

        // k-means cannot fill more clusters than there are distinct points.
        let distinct = vectors.iter().collect::<HashSet<_>>().len();
        if config.n_clusters > distinct {
            return Err(Error::InvalidClusterCount {
                requested: config.n_clusters,
                n_items: distinct,
            });
        }

        let dim = vocabulary.len();
        let dense: Vec<Vec<f32>> = vectors.iter().map(|v| v.to_dense(dim)).collect();
        let fit = config.kmeans().fit(&dense)?;
        info!(
            "clustered students into k={} (iterations={}, inertia={:.3})",
            config.n_clusters, fit.iterations, fit.inertia
        );

        let snapshot = Self {
            students,
            combined,
            labels: fit.labels,
            index,
            clubs,
            vocabulary,
            vectors,
            n_clusters: config.n_clusters,
            inertia: fit.inertia,
        };
        debug!("cluster sizes: {:?}", snapshot.cluster_sizes());
        Ok(snapshot)
    }

    /// Number of student clusters (`K`).
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Within-cluster sum of squares of the assignment.
    pub fn inertia(&self) -> f32 {
        self.inertia
    }

    /// Vocabulary of all students' combined interests.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The club table, in input order.
    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    /// Number of students.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Always false; a snapshot cannot be built from an empty table.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Every student with its cluster label, in table order.
    pub fn students(&self) -> impl Iterator<Item = StudentCluster<'_>> + '_ {
        self.students
            .iter()
            .zip(self.labels.iter())
            .map(|(s, &cluster)| StudentCluster {
                id: s.id,
                name: &s.name,
                cluster,
            })
    }

    /// Look up a student record.
    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.index.get(&id).map(|&row| &self.students[row])
    }

    /// Cluster label of a student.
    pub fn cluster_of(&self, id: StudentId) -> Option<usize> {
        self.index.get(&id).map(|&row| self.labels[row])
    }

    /// Combined interest text of a student.
    pub fn combined_interests(&self, id: StudentId) -> Option<&str> {
        self.index.get(&id).map(|&row| self.combined[row].as_str())
    }

    /// Term-count vector of a student.
    pub fn term_counts(&self, id: StudentId) -> Option<&TermCounts> {
        self.index.get(&id).map(|&row| &self.vectors[row])
    }

    /// Number of students per cluster label; always `n_clusters` long.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.n_clusters];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }

    /// Distinct club names in first-seen order.
    pub fn club_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.clubs
            .iter()
            .map(|c| c.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Rows whose cluster is in `clusters`, in table order.
    pub(crate) fn rows_in_clusters<'a>(
        &'a self,
        clusters: &'a HashSet<usize>,
    ) -> impl Iterator<Item = usize> + 'a {
        self.labels
            .iter()
            .enumerate()
            .filter(move |(_, label)| clusters.contains(*label))
            .map(|(row, _)| row)
    }

    pub(crate) fn row_of(&self, id: StudentId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub(crate) fn combined_at(&self, row: usize) -> &str {
        &self.combined[row]
    }

    pub(crate) fn student_at(&self, row: usize) -> &Student {
        &self.students[row]
    }
}
