//! The graph side of a spreading simulation.
//!
//! Simulations never look at node identities while stepping. They work on
//! dense indices `0..node_count()` and only use [`Network::index_of`] once,
//! when the seed sets are translated.

use {
    std::{
        collections::HashMap,
        fmt::Debug,
        hash::Hash
    },
    net_ensembles::{GenericGraph, AdjContainer, Node},
    super::SpreadError
};

/// Read-only view of an undirected network.
pub trait Network
{
    /// Opaque node identity used by callers, e.g. for seed sets
    type Id: Eq + Hash + Clone + Debug;

    fn node_count(&self) -> usize;

    /// Dense index of `id`, `None` if the node is not part of the network
    fn index_of(&self, id: &Self::Id) -> Option<usize>;

    /// Indices of all nodes adjacent to the node at `index`.
    /// `index` has to be smaller than [`Network::node_count`]
    fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_;
}

impl<T, A> Network for GenericGraph<T, A>
where T: Node,
    A: AdjContainer<T>
{
    type Id = usize;

    fn node_count(&self) -> usize
    {
        self.vertex_count()
    }

    fn index_of(&self, id: &usize) -> Option<usize>
    {
        (*id < self.vertex_count()).then_some(*id)
    }

    fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_
    {
        self.contained_iter_neighbors_with_index(index)
            .map(|(n_index, _)| n_index)
    }
}

/// Adjacency list keyed by arbitrary node identities.
#[derive(Clone, Debug)]
pub struct LabeledNetwork<Id>
{
    ids: Vec<Id>,
    lookup: HashMap<Id, usize>,
    adjacency: Vec<Vec<usize>>
}

impl<Id> LabeledNetwork<Id>
where Id: Eq + Hash + Clone + Debug
{
    /// Network without edges. Repeated identities are only added once.
    pub fn new<I>(nodes: I) -> Self
    where I: IntoIterator<Item = Id>
    {
        let mut ids = Vec::new();
        let mut lookup = HashMap::new();
        for id in nodes{
            if !lookup.contains_key(&id){
                lookup.insert(id.clone(), ids.len());
                ids.push(id);
            }
        }
        let adjacency = vec![Vec::new(); ids.len()];
        Self{
            ids,
            lookup,
            adjacency
        }
    }

    pub fn with_edges<I, E>(nodes: I, edges: E) -> Result<Self, SpreadError>
    where I: IntoIterator<Item = Id>,
        E: IntoIterator<Item = (Id, Id)>
    {
        let mut network = Self::new(nodes);
        for (a, b) in edges{
            network.add_edge(&a, &b)?;
        }
        Ok(network)
    }

    /// Connects `a` and `b`. Self loops and edges that already exist are ignored.
    pub fn add_edge(&mut self, a: &Id, b: &Id) -> Result<(), SpreadError>
    {
        let i = self.lookup_index(a)?;
        let j = self.lookup_index(b)?;
        if i == j || self.adjacency[i].contains(&j){
            return Ok(());
        }
        self.adjacency[i].push(j);
        self.adjacency[j].push(i);
        Ok(())
    }

    pub fn id(&self, index: usize) -> Option<&Id>
    {
        self.ids.get(index)
    }

    pub fn edge_count(&self) -> usize
    {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    fn lookup_index(&self, id: &Id) -> Result<usize, SpreadError>
    {
        self.lookup
            .get(id)
            .copied()
            .ok_or_else(|| SpreadError::unknown_node(id))
    }
}

impl<Id> Network for LabeledNetwork<Id>
where Id: Eq + Hash + Clone + Debug
{
    type Id = Id;

    fn node_count(&self) -> usize
    {
        self.ids.len()
    }

    fn index_of(&self, id: &Id) -> Option<usize>
    {
        self.lookup.get(id).copied()
    }

    fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_
    {
        self.adjacency[index].iter().copied()
    }
}

#[cfg(test)]
mod tests{
    use {
        super::*,
        net_ensembles::Graph,
        crate::spread_model::InfectionState
    };

    #[test]
    fn labeled_network_is_symmetric(){
        let network = LabeledNetwork::with_edges(
            ["a", "b", "c"],
            [("a", "b"), ("b", "c"), ("b", "a"), ("c", "c")]
        ).unwrap();

        assert_eq!(network.node_count(), 3);
        assert_eq!(network.edge_count(), 2);
        let b = network.index_of(&"b").unwrap();
        let mut neighbors: Vec<_> = network.neighbors(b)
            .map(|i| *network.id(i).unwrap())
            .collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec!["a", "c"]);
    }

    #[test]
    fn duplicate_nodes_collapse(){
        let network = LabeledNetwork::new([7, 7, 8]);
        assert_eq!(network.node_count(), 2);
    }

    #[test]
    fn edge_to_unknown_node_is_rejected(){
        let mut network = LabeledNetwork::new([1, 2]);
        let err = network.add_edge(&1, &3).unwrap_err();
        assert!(matches!(err, SpreadError::UnknownNode{..}));
    }

    #[test]
    fn generic_graph_uses_vertex_indices(){
        let mut graph: Graph<InfectionState> = Graph::new(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 3).unwrap();

        assert_eq!(Network::node_count(&graph), 4);
        assert_eq!(graph.index_of(&3), Some(3));
        assert_eq!(graph.index_of(&4), None);
        let mut neighbors: Vec<_> = Network::neighbors(&graph, 0).collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![1, 3]);
        assert_eq!(Network::neighbors(&graph, 2).count(), 0);
    }
}
