//! K-means with k-means++ seeding and Lloyd iterations.
//!
//! ## Algorithm
//!
//! 1. **Seeding (k-means++)**: the first centroid is a uniformly random point; each
//!    following centroid is drawn with probability proportional to its squared
//!    distance from the nearest centroid chosen so far.
//! 2. **Lloyd iterations**: assign every point to its nearest centroid, then move each
//!    centroid to the mean of its points. A centroid that loses all of its points stays
//!    where it was.
//! 3. **Restarts**: the whole procedure runs `n_init` times from independent seeds
//!    derived from the configured one, and the run with the lowest inertia is kept
//!    (the earliest run on ties).
//!
//! Everything is driven by a single seeded [`StdRng`], so a fixed seed, a fixed
//! dataset and a fixed `k` always produce the same labels.

use super::traits::Clustering;
use super::util::{nearest_centroid, squared_euclidean};
use crate::error::{Error, Result};
use rand::prelude::*;

/// K-means clusterer.
#[derive(Debug, Clone)]
pub struct Kmeans {
    k: usize,
    max_iter: usize,
    tol: f32,
    n_init: usize,
    seed: Option<u64>,
}

/// Result of fitting [`Kmeans`].
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit {
    /// One label per input point, in `0..k`.
    pub labels: Vec<usize>,
    /// Final centroids, `k` of them.
    pub centroids: Vec<Vec<f32>>,
    /// Within-cluster sum of squared distances.
    pub inertia: f32,
    /// Lloyd iterations performed by the winning restart.
    pub iterations: usize,
}

impl Kmeans {
    /// Create a clusterer for `k` clusters with default settings
    /// (300 iterations, tolerance 1e-4, 10 restarts, unseeded).
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 300,
            tol: 1e-4,
            n_init: 10,
            seed: None,
        }
    }

    /// Set the RNG seed. Without a seed every fit draws fresh entropy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the maximum number of Lloyd iterations per restart.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence tolerance on centroid movement.
    pub fn with_tol(mut self, tol: f32) -> Self {
        self.tol = tol;
        self
    }

    /// Set the number of restarts.
    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init;
        self
    }

    fn validate(&self, data: &[Vec<f32>]) -> Result<usize> {
        let n = data.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        if self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
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
        if self.tol.is_nan() || self.tol < 0.0 {
            return Err(Error::InvalidParameter {
                name: "tol",
                message: "must be non-negative",
            });
        }

        let dim = data[0].len();
        for point in data {
            if point.len() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    found: point.len(),
                });
            }
        }
        Ok(dim)
    }

    /// Fit the model and return labels, centroids and inertia.
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<KmeansFit> {
        let dim = self.validate(data)?;

        let mut master: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        let mut best: Option<KmeansFit> = None;
        for _ in 0..self.n_init {
            let mut rng = StdRng::seed_from_u64(master.next_u64());
            let run = self.lloyd(data, dim, &mut rng);
            let better = match &best {
                Some(b) => run.inertia < b.inertia,
                None => true,
            };
            if better {
                best = Some(run);
            }
        }

        best.ok_or(Error::EmptyInput)
    }

    /// Assign `point` to the nearest of `centroids` (lowest index on ties).
    ///
    /// Returns `None` when there are no centroids.
    pub fn predict(centroids: &[Vec<f32>], point: &[f32]) -> Option<usize> {
        if centroids.is_empty() {
            return None;
        }
        Some(nearest_centroid(point, centroids).0)
    }

    fn lloyd(&self, data: &[Vec<f32>], dim: usize, rng: &mut StdRng) -> KmeansFit {
        let n = data.len();
        let mut centroids = init_plus_plus(data, self.k, rng);
        let mut labels = vec![usize::MAX; n];
        let tol_sq = self.tol * self.tol;
        let mut iterations = 0;

        for _ in 0..self.max_iter {
            iterations += 1;

            let mut changed = false;
            for (i, point) in data.iter().enumerate() {
                let (c, _) = nearest_centroid(point, &centroids);
                if labels[i] != c {
                    labels[i] = c;
                    changed = true;
                }
            }
            if !changed {
                break;
            }

            let mut sums = vec![vec![0.0f32; dim]; self.k];
            let mut counts = vec![0usize; self.k];
            for (point, &c) in data.iter().zip(labels.iter()) {
                counts[c] += 1;
                for (s, x) in sums[c].iter_mut().zip(point.iter()) {
                    *s += x;
                }
            }

            let mut max_shift = 0.0f32;
            for (c, sum) in sums.into_iter().enumerate() {
                // Empty cluster: keep the old centroid.
                if counts[c] == 0 {
                    continue;
                }
                let inv = 1.0 / counts[c] as f32;
                let updated: Vec<f32> = sum.into_iter().map(|s| s * inv).collect();
                max_shift = max_shift.max(squared_euclidean(&centroids[c], &updated));
                centroids[c] = updated;
            }
            if max_shift <= tol_sq {
                break;
            }
        }

        // Final assignment so labels always agree with the returned centroids.
        let mut inertia = 0.0f32;
        for (i, point) in data.iter().enumerate() {
            let (c, d) = nearest_centroid(point, &centroids);
            labels[i] = c;
            inertia += d;
        }

        KmeansFit {
            labels,
            centroids,
            inertia,
            iterations,
        }
    }
}

/// k-means++ seeding. Requires `1 <= k <= data.len()`.
fn init_plus_plus(data: &[Vec<f32>], k: usize, rng: &mut StdRng) -> Vec<Vec<f32>> {
    let n = data.len();
    let mut centroids: Vec<Vec<f32>> = Vec::with_capacity(k);
    centroids.push(data[rng.random_range(0..n)].clone());

    let mut closest: Vec<f32> = data
        .iter()
        .map(|p| squared_euclidean(p, &centroids[0]))
        .collect();

    while centroids.len() < k {
        let total: f64 = closest.iter().map(|&d| f64::from(d)).sum();
        let next = if total > 0.0 {
            let target = rng.random::<f64>() * total;
            let mut acc = 0.0f64;
            let mut pick = None;
            for (i, &d) in closest.iter().enumerate() {
                if d <= 0.0 {
                    continue;
                }
                acc += f64::from(d);
                pick = Some(i);
                if acc >= target {
                    break;
                }
            }
            pick.unwrap_or(0)
        } else {
            // Every point coincides with a centroid already.
            rng.random_range(0..n)
        };

        let chosen = data[next].clone();
        for (c, p) in closest.iter_mut().zip(data.iter()) {
            *c = c.min(squared_euclidean(p, &chosen));
        }
        centroids.push(chosen);
    }

    centroids
}

impl Default for Kmeans {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}
