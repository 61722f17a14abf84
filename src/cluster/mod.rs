//! Clustering of interest vectors.
//!
//! Students are grouped by running k-means over their term-count vectors: one
//! dimension per vocabulary token, Euclidean distance, a fixed number of clusters.
//!
//! ## K-means
//!
//! Assign each point to the nearest centroid, then update centroids to the mean
//! of their points. Repeat.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! The result depends on the initial centroids, so seeding goes through a seeded
//! RNG: the same data, `k` and seed always give the same labels.
//!
//! ## Usage
//!
//! ```rust
//! use clubmatch::cluster::{Clustering, Kmeans};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//! ```

mod kmeans;
mod traits;
mod util;

pub use kmeans::{Kmeans, KmeansFit};
pub use traits::Clustering;
