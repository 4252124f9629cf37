/*!
# Random Generation

Seedable randomness and random graph generation for tests, benchmarks and
"scatter some stars" editor features.

[`RandomGenerator`] is the crate's random source: a small PCG generator
that is cheap to create, seedable for reproducible runs and usable
everywhere the `rand` ecosystem expects an [`Rng`]. [`RandomEdges`] is a
fluent `G(n,p)`-style builder producing weighted edge lists, and
[`RandomGraph`] turns those directly into graph instances.
*/

use std::ops::Range;

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::{prelude::*, utils::Probability};

/// Random source used throughout the crate.
///
/// Wraps a [`Pcg64Mcg`] which is fast, small and statistically solid for
/// anything short of cryptography. Two generators built with
/// [`from_seed`](RandomGenerator::from_seed) and the same seed produce
/// identical streams.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    rng: Pcg64Mcg,
}

impl RandomGenerator {
    /// Creates a generator seeded from the thread-local entropy source.
    pub fn new() -> Self {
        Self {
            rng: Pcg64Mcg::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a generator with a fixed seed for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Returns a uniform random vertex index in `0..n`.
    pub fn node_below(&mut self, n: NumNodes) -> Node {
        self.rng.random_range(0..n)
    }

    /// Returns a uniform random weight in the given half-open range.
    pub fn weight_in(&mut self, range: Range<Weight>) -> Weight {
        self.rng.random_range(range)
    }

    /// Returns *true* with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for RandomGenerator {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }
}

/// Trait for generators that allow setting the number of vertices.
///
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of vertices in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
pub trait EdgeGenerator {
    /// Generates a list of random weighted edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng;
}

/// `G(n,p)`-style generator for weighted edges: every unordered pair of
/// distinct vertices becomes an edge with probability `p`, independent of
/// all others, with a weight drawn uniformly from a configurable range.
#[derive(Debug, Clone)]
pub struct RandomEdges {
    n: NumNodes,
    p: f64,
    weights: Range<Weight>,
}

impl Default for RandomEdges {
    fn default() -> Self {
        Self {
            n: 0,
            p: 0.0,
            weights: 1..2,
        }
    }
}

impl RandomEdges {
    /// Creates a new empty generator. Defaults to probability `0` and
    /// unit weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the edge probability.
    pub fn edge_prob(mut self, p: f64) -> Self {
        assert!(p.is_valid_probability());
        self.p = p;
        self
    }

    /// Sets the half-open range weights are drawn from.
    pub fn weights(mut self, range: Range<Weight>) -> Self {
        assert!(!range.is_empty());
        self.weights = range;
        self
    }

    /// The configured number of vertices.
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl NumNodesGen for RandomEdges {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl EdgeGenerator for RandomEdges {
    /// Pair enumeration needs the random source at every step, so this
    /// materializes the edge list upfront and streams from it.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng,
    {
        let mut edges = Vec::new();
        for u in 0..self.n {
            for v in (u + 1)..self.n {
                if rng.random_bool(self.p) {
                    edges.push(WeightedEdge(u, v, rng.random_range(self.weights.clone())));
                }
            }
        }
        edges.into_iter()
    }
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: GraphFromScratch {
    /// Creates a random graph from the configured edge generator.
    fn random<R>(rng: &mut R, edges: &RandomEdges) -> Self
    where
        R: Rng,
        Self::Payload: Default,
    {
        // generated endpoints always lie in 0..n
        Self::from_edges(edges.number_of_nodes(), edges.generate(rng)).unwrap()
    }
}

impl<G> RandomGraph for G where G: GraphFromScratch {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::GraphList;

    #[test]
    fn seeded_generators_agree() {
        let mut a = RandomGenerator::from_seed(1234);
        let mut b = RandomGenerator::from_seed(1234);
        for _ in 0..100 {
            assert_eq!(a.node_below(50), b.node_below(50));
            assert_eq!(a.weight_in(-10..10), b.weight_in(-10..10));
        }
    }

    #[test]
    fn values_respect_bounds() {
        let mut rng = RandomGenerator::from_seed(99);
        for _ in 0..1000 {
            assert!(rng.node_below(7) < 7);
            let w = rng.weight_in(3..9);
            assert!((3..9).contains(&w));
        }
        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
    }

    #[test]
    fn edge_probability_extremes() {
        let mut rng = RandomGenerator::from_seed(7);
        let model = RandomEdges::new().nodes(10).edge_prob(0.0);
        assert!(model.generate(&mut rng).is_empty());

        let model = RandomEdges::new().nodes(10).edge_prob(1.0);
        let edges = model.generate(&mut rng);
        assert_eq!(edges.len(), 45); // all pairs, no self-loops
        assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
        assert!(edges.iter().all(|e| e.weight() == 1));
    }

    #[test]
    fn weights_are_drawn_from_range() {
        let mut rng = RandomGenerator::from_seed(21);
        let model = RandomEdges::new().nodes(8).edge_prob(1.0).weights(5..8);
        assert!(model
            .generate(&mut rng)
            .iter()
            .all(|e| (5..8).contains(&e.weight())));
    }

    #[test]
    fn random_graph_is_reproducible() {
        let model = RandomEdges::new().nodes(20).edge_prob(0.3).weights(1..100);

        let a = GraphList::<()>::random(&mut RandomGenerator::from_seed(42), &model);
        let b = GraphList::<()>::random(&mut RandomGenerator::from_seed(42), &model);

        assert_eq!(a.number_of_nodes(), 20);
        assert_eq!(a.number_of_edges(), b.number_of_edges());
        assert_eq!(a.ordered_edges(), b.ordered_edges());
    }
}
