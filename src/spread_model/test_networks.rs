//! Small networks shared by the model tests.

use {
    proptest::prelude::*,
    super::{LabeledNetwork, SeedSets}
};

/// 1 - 2 - ... - n
pub fn path_network(n: u32) -> LabeledNetwork<u32>
{
    LabeledNetwork::with_edges(1..=n, (1..n).map(|i| (i, i + 1)))
        .expect("path edges only use existing nodes")
}

/// every pair of the nodes 1..=n connected
pub fn complete_network(n: u32) -> LabeledNetwork<u32>
{
    let edges = (1..=n)
        .flat_map(|i| (i + 1..=n).map(move |j| (i, j)));
    LabeledNetwork::with_edges(1..=n, edges)
        .expect("complete graph edges only use existing nodes")
}

/// star with center 0 and leaves 1..=leaves
pub fn star_network(leaves: u32) -> LabeledNetwork<u32>
{
    LabeledNetwork::with_edges(0..=leaves, (1..=leaves).map(|leaf| (0, leaf)))
        .expect("star edges only use existing nodes")
}

/// random simple graph on 0..n together with two (possibly overlapping) seed sets
pub fn network_with_seeds() -> impl Strategy<Value = (LabeledNetwork<u32>, SeedSets<u32>)>
{
    (1_u32..25).prop_flat_map(
        |n|
        (
            prop::collection::vec((0..n, 0..n), 0..60),
            prop::collection::vec(0..n, 0..5),
            prop::collection::vec(0..n, 0..5)
        ).prop_map(
            move |(edges, high, low)|
            {
                let network = LabeledNetwork::with_edges(0..n, edges)
                    .expect("generated edges only use existing nodes");
                (network, SeedSets::new(high, low))
            }
        )
    )
}
