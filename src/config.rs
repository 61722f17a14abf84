use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cluster::Kmeans;
use crate::error::{Error, Result};

/// Settings for building a [`Snapshot`](crate::Snapshot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Number of student clusters (`K`).
    pub n_clusters: usize,
    /// Seed for k-means initialization.
    pub seed: u64,
    /// Maximum Lloyd iterations per restart.
    pub max_iter: usize,
    /// Convergence tolerance on centroid movement.
    pub tolerance: f32,
    /// Number of k-means restarts; the lowest-inertia run is kept.
    pub n_init: usize,
    /// Token standing in for a missing interest field.
    pub missing_placeholder: String,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            n_clusters: 3,
            seed: 42,
            max_iter: 300,
            tolerance: 1e-4,
            n_init: 10,
            missing_placeholder: "nan".to_string(),
        }
    }
}

impl RecommenderConfig {
    /// Set the number of student clusters.
    pub fn with_n_clusters(mut self, n_clusters: usize) -> Self {
        self.n_clusters = n_clusters;
        self
    }

    /// Set the k-means seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the maximum Lloyd iterations per restart.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the number of k-means restarts.
    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init;
        self
    }

    /// Set the token used for missing interest fields.
    pub fn with_missing_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.missing_placeholder = placeholder.into();
        self
    }

    /// Parse a JSON config. Absent keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file. Absent keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref()).map_err(serde_json::Error::io)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }

    /// Check the configuration against a population of `n_students`.
    pub fn validate(&self, n_students: usize) -> Result<()> {
        if self.n_clusters == 0 {
            return Err(Error::InvalidParameter {
                name: "n_clusters",
                message: "must be at least 1",
            });
        }
        if self.n_clusters > n_students {
            return Err(Error::InvalidClusterCount {
                requested: self.n_clusters,
                n_items: n_students,
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        if self.n_init == 0 {
            return Err(Error::InvalidParameter {
                name: "n_init",
                message: "must be at least 1",
            });
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(Error::InvalidParameter {
                name: "tolerance",
                message: "must be non-negative",
            });
        }
        let p = &self.missing_placeholder;
        if p.is_empty() || p.chars().any(char::is_whitespace) {
            return Err(Error::InvalidParameter {
                name: "missing_placeholder",
                message: "must be a single non-empty token",
            });
        }
        Ok(())
    }

    pub(crate) fn kmeans(&self) -> Kmeans {
        Kmeans::new(self.n_clusters)
            .with_seed(self.seed)
            .with_max_iter(self.max_iter)
            .with_tol(self.tolerance)
            .with_n_init(self.n_init)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RecommenderConfig::default();
        assert_eq!(config.n_clusters, 3);
        assert_eq!(config.seed, 42);
        assert_eq!(config.missing_placeholder, "nan");
        assert!(config.validate(3).is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RecommenderConfig::from_json_str(r#"{"n_clusters": 5, "seed": 7}"#).unwrap();
        assert_eq!(config.n_clusters, 5);
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_iter, 300);
        assert_eq!(config.n_init, 10);
        assert_eq!(config.missing_placeholder, "nan");

        let empty = RecommenderConfig::from_json_str("{}").unwrap();
        assert_eq!(empty, RecommenderConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = RecommenderConfig::from_json_str(r#"{"n_clusters": "three"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(RecommenderConfig::load("/nonexistent/clubmatch.json").is_err());
    }

    #[test]
    fn rejects_more_clusters_than_students() {
        let err = RecommenderConfig::default().validate(2).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidClusterCount {
                requested: 3,
                n_items: 2
            }
        ));
        assert!(err.is_configuration());
    }

    #[test]
    fn rejects_bad_parameters() {
        let base = RecommenderConfig::default();
        assert!(base.clone().with_n_clusters(0).validate(5).is_err());
        assert!(base.clone().with_max_iter(0).validate(5).is_err());
        assert!(base.clone().with_n_init(0).validate(5).is_err());
        assert!(base.clone().with_tolerance(-1.0).validate(5).is_err());
        assert!(base.clone().with_missing_placeholder("").validate(5).is_err());
        assert!(base.with_missing_placeholder("no value").validate(5).is_err());
    }
}
