//! Club recommendations from clusters of student interests.
//!
//! `clubmatch` turns each student's three free-text interests into a bag-of-words
//! count vector, groups students with k-means, and recommends clubs by how often
//! their subject occurs among the interests of everyone sharing a cluster with
//! the queried students.
//!
//! - [`text`]: field joining, whitespace tokenization, count vectorization
//! - [`cluster`]: k-means (k-means++ seeding, Lloyd iterations, seeded restarts)
//! - [`Snapshot`]: the model built once at startup; all queries read from it
//! - [`analytics`]: club-table reports (popularity buckets, demand leaderboard)
//!
//! ```rust
//! use clubmatch::{Club, RecommenderConfig, Snapshot, Student};
//!
//! let students = vec![
//!     Student::new(1, "Alice", [Some("chess".into()), Some("music".into()), None]),
//!     Student::new(2, "Bob", [Some("chess".into()), Some("art".into()), None]),
//! ];
//! let clubs = vec![Club::new("Chess Club", "chess"), Club::new("Art Club", "art")];
//!
//! let config = RecommenderConfig::default().with_n_clusters(1);
//! let snapshot = Snapshot::build(students, clubs, &config).unwrap();
//!
//! let recs = snapshot.recommend(&[1]);
//! assert_eq!(recs[0].club_name, "Chess Club");
//! assert_eq!(recs[0].frequency, 2);
//! ```

#![forbid(unsafe_code)]

pub mod analytics;
pub mod cluster;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
mod recommend;
mod snapshot;
pub mod text;

pub use analytics::{club_leaderboard, club_pseudo_clusters, DemandEntry, PopularityBucket};
pub use cluster::{Clustering, Kmeans, KmeansFit};
pub use config::RecommenderConfig;
pub use error::{Error, Result};
pub use model::{Club, InterestedStudent, Recommendation, Student, StudentCluster, StudentId};
pub use snapshot::Snapshot;
