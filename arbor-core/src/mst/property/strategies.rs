//! Strategy builders for MST property-based tests.
//!
//! Each generator draws its structure from a seeded [`SmallRng`] so that a
//! failing proptest case reduces to a single `(distribution, seed)` pair that
//! the rstest cases can pin.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for most generated graphs.
const MIN_NODES: usize = 4;
/// Maximum node count for most generated graphs.
const MAX_NODES: usize = 40;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 24;

/// Generates MST fixtures covering all weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_random_graph(
            rng,
            MAX_NODES,
            (0.2, 0.6),
            distribution,
            continuous_weight,
        ),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_random_graph(
            rng,
            DENSE_MAX_NODES,
            (0.7, 0.95),
            distribution,
            continuous_weight,
        ),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

fn continuous_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1..100.0)
}

// ── Random pairs ────────────────────────────────────────────────────────

/// Adds every unordered pair with a sampled probability; the result may be
/// disconnected.
fn generate_random_graph(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let edge_probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();

    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(edge_probability) {
                edges.push((i, j, weight(rng)));
            }
        }
    }

    MstFixture {
        node_count,
        edges,
        distribution,
    }
}

/// Draws every weight from a pool of one to three small integers so that
/// many edges tie.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<f64> = (0..pool_size)
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();

    generate_random_graph(
        rng,
        MAX_NODES,
        (0.3, 0.7),
        WeightDistribution::ManyIdentical,
        move |r| pool[r.gen_range(0..pool.len())],
    )
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Builds a random spanning path (guaranteeing connectivity) and then adds
/// roughly `0.5n` to `n` extra edges.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut edges = Vec::new();

    let mut order: Vec<usize> = (0..node_count).collect();
    shuffle(&mut order, rng);
    for pair in order.windows(2) {
        edges.push((pair[0], pair[1], continuous_weight(rng)));
    }

    let extra_count = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..node_count);
        let j = rng.gen_range(0..node_count);
        if i != j {
            edges.push((i, j, continuous_weight(rng)));
        }
    }

    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Builds 2 to 5 components of 1 to 10 nodes each, every one internally
/// connected by a random path plus random chords.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let mut edges = Vec::new();
    let mut offset = 0;

    for _ in 0..component_count {
        let size = rng.gen_range(1..=10);
        for node in (offset + 1)..(offset + size) {
            let parent = rng.gen_range(offset..node);
            edges.push((parent, node, continuous_weight(rng)));
        }
        for i in offset..(offset + size) {
            for j in (i + 1)..(offset + size) {
                if rng.gen_bool(0.25) {
                    edges.push((i, j, continuous_weight(rng)));
                }
            }
        }
        offset += size;
    }

    MstFixture {
        node_count: offset,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
