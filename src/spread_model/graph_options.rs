//! Networks drawn from the ensembles of `net_ensembles`, used by the command line driver.

use {
    std::num::NonZeroUsize,
    rand_pcg::Pcg64,
    tracing::info,
    net_ensembles::{
        BAensemble,
        SwEnsemble,
        WithGraph,
        SimpleSample,
        rand::SeedableRng,
    },
    crate::misc_types::GraphType,
    super::*
};

pub type SmallWorldNetwork = net_ensembles::GenericGraph<InfectionState, net_ensembles::sw_graph::SwContainer<InfectionState>>;
pub type BarabasiNetwork = net_ensembles::GenericGraph<InfectionState, net_ensembles::graph::NodeContainer<InfectionState>>;

pub type SmallWorldEnsemble = SwEnsemble<InfectionState, Pcg64>;
pub type BarabasiEnsemble = BAensemble<InfectionState, Pcg64>;

/// upper limit of redraws while looking for a connected network
pub const MAX_CONNECT_ATTEMPTS: u32 = 10_000;

pub struct NetworkOptions{
    pub graph_seed: u64,
    pub system_size: NonZeroUsize,
}

impl NetworkOptions{
    pub fn new(system_size: NonZeroUsize, graph_seed: u64) -> Self
    {
        Self{
            graph_seed,
            system_size
        }
    }

    pub fn small_world(&self, rewire_prob: f64) -> Result<SmallWorldNetwork, SpreadError>
    {
        if !(0.0..=1.0).contains(&rewire_prob){
            return Err(SpreadError::probability("rewire_prob", rewire_prob));
        }
        let graph_rng = Pcg64::seed_from_u64(self.graph_seed);
        let mut ensemble = SmallWorldEnsemble::new(self.system_size.get(), rewire_prob, graph_rng);
        let counter = redraw_until_connected(
            &mut ensemble,
            |e| e.graph().is_connected(),
            |e| e.randomize()
        )?;
        log_redraws(GraphType::SmallWorld(rewire_prob), counter);
        Ok(ensemble.graph().clone())
    }

    pub fn barabasi(&self, m: usize, source_n: usize) -> Result<BarabasiNetwork, SpreadError>
    {
        let n = self.system_size.get();
        if m == 0 || m > source_n || source_n > n{
            return Err(
                SpreadError::InvalidParameter{
                    name: "graph_type",
                    reason: format!("Barabasi network needs 0 < m <= source_n <= system_size, got m={m} source_n={source_n} system_size={n}")
                }
            );
        }
        let graph_rng = Pcg64::seed_from_u64(self.graph_seed);
        let mut ensemble = BarabasiEnsemble::new(n, graph_rng, m, source_n);
        let counter = redraw_until_connected(
            &mut ensemble,
            |e| e.graph().is_connected(),
            |e| e.randomize()
        )?;
        log_redraws(GraphType::Barabasi(m, source_n), counter);
        Ok(ensemble.graph().clone())
    }
}

fn redraw_until_connected<E, C, D>(ensemble: &mut E, is_connected: C, mut randomize: D) -> Result<u32, SpreadError>
where C: Fn(&E) -> Option<bool>,
    D: FnMut(&mut E)
{
    let mut counter = 0_u32;
    // None only happens for empty networks
    while matches!(is_connected(&*ensemble), Some(false)){
        if counter == MAX_CONNECT_ATTEMPTS{
            return Err(
                SpreadError::InvalidParameter{
                    name: "graph_type",
                    reason: format!("no connected network found after {counter} redraws")
                }
            );
        }
        counter += 1;
        randomize(&mut *ensemble);
    }
    Ok(counter)
}

fn log_redraws(graph_type: GraphType, counter: u32)
{
    if counter > 0{
        info!(graph = %graph_type.name(), counter, "randomized the ensemble additional times to find a connected network");
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn small_world_has_requested_size(){
        let options = NetworkOptions::new(NonZeroUsize::new(50).unwrap(), 17);
        let network = options.small_world(0.1).unwrap();
        assert_eq!(Network::node_count(&network), 50);
        assert_eq!(network.index_of(&49), Some(49));
    }

    #[test]
    fn small_world_rejects_bad_rewire_probability(){
        let options = NetworkOptions::new(NonZeroUsize::new(50).unwrap(), 17);
        assert!(options.small_world(1.2).is_err());
    }

    #[test]
    fn barabasi_parameters_are_checked(){
        let options = NetworkOptions::new(NonZeroUsize::new(10).unwrap(), 3);
        assert!(options.barabasi(0, 2).is_err());
        assert!(options.barabasi(3, 2).is_err());
        assert!(options.barabasi(2, 11).is_err());
    }
}
