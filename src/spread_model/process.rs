use {
    rand::Rng,
    tracing::{debug, trace},
    super::*
};

/// One seeded run of a spreading model on a fixed network.
///
/// Implementors collect all transitions of a step from the state at the
/// start of that step and apply them only afterwards.
pub trait SpreadProcess
{
    type Curves;

    fn model_name(&self) -> &'static str;

    fn curves_for_horizon(time_steps: usize) -> Self::Curves;

    /// Writes the current state counts to index `t` of `curves`
    fn record(&self, curves: &mut Self::Curves, t: usize);

    fn propagate_one_time_step<R>(&mut self, rng: &mut R)
    where R: Rng + ?Sized;
}

/// Records the initial condition and then steps the process `time_steps` times.
/// There is no early exit, absorbed processes keep recording unchanged counts.
pub fn propagate_until_horizon<P, R>(mut process: P, time_steps: usize, rng: &mut R) -> P::Curves
where P: SpreadProcess,
    R: Rng + ?Sized
{
    let mut curves = P::curves_for_horizon(time_steps);
    process.record(&mut curves, 0);
    for t in 1..=time_steps{
        process.propagate_one_time_step(rng);
        process.record(&mut curves, t);
        trace!(model = process.model_name(), step = t, "recorded step");
    }
    curves
}

/// Runs the high centrality seeded process and afterwards the low centrality one.
/// Both only share the rng.
pub(crate) fn compare_strategies<P, R>(
    high_centrality: P,
    low_centrality: P,
    time_steps: usize,
    rng: &mut R
) -> Comparison<P::Curves>
where P: SpreadProcess,
    R: Rng + ?Sized
{
    debug!(model = high_centrality.model_name(), time_steps, "starting seed comparison");
    let high_centrality = propagate_until_horizon(high_centrality, time_steps, rng);
    let low_centrality = propagate_until_horizon(low_centrality, time_steps, rng);
    Comparison{
        high_centrality,
        low_centrality
    }
}

/// Susceptible / infected / recovered partition of the node set.
///
/// Keeps one state tag per node and the size of every compartment,
/// so recording a step does not need to scan the network.
#[derive(Clone, Debug)]
pub(crate) struct Compartments{
    states: Vec<InfectionState>,
    counts: [usize; 3]
}

impl Compartments{
    /// every node susceptible except for `seeds`, which are infected
    pub fn seeded(node_count: usize, seeds: &[usize]) -> Self
    {
        let mut res = Self{
            states: vec![InfectionState::Susceptible; node_count],
            counts: [node_count, 0, 0]
        };
        for &seed in seeds{
            res.move_to(seed, InfectionState::Infected);
        }
        res
    }

    #[inline]
    pub fn state(&self, index: usize) -> InfectionState
    {
        self.states[index]
    }

    pub fn move_to(&mut self, index: usize, new_state: InfectionState)
    {
        let old = std::mem::replace(&mut self.states[index], new_state);
        self.counts[old.slot()] -= 1;
        self.counts[new_state.slot()] += 1;
    }

    pub fn count(&self, state: InfectionState) -> usize
    {
        self.counts[state.slot()]
    }

    pub fn indices_in(&self, state: InfectionState) -> impl Iterator<Item = usize> + '_
    {
        self.states.iter()
            .enumerate()
            .filter(move |(_, s)| **s == state)
            .map(|(index, _)| index)
    }
}

/// Marks every susceptible node that gets infected by at least one of its
/// infected neighbors. One Bernoulli trial per infected neighbor, the first
/// success ends the trials of that node.
pub(crate) fn collect_new_infections<N, R>(
    network: &N,
    compartments: &Compartments,
    transmission: &rand::distributions::Bernoulli,
    rng: &mut R,
    new_infected_list: &mut Vec<usize>
)
where N: Network,
    R: Rng + ?Sized
{
    debug_assert!(new_infected_list.is_empty());
    for index in compartments.indices_in(InfectionState::Susceptible){
        let infected = network.neighbors(index)
            .filter(|&n_index| compartments.state(n_index).inf_check())
            .any(|_| rng.sample(transmission));
        if infected{
            new_infected_list.push(index);
        }
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn compartments_track_counts(){
        let mut compartments = Compartments::seeded(5, &[1, 3]);
        assert_eq!(compartments.count(InfectionState::Susceptible), 3);
        assert_eq!(compartments.count(InfectionState::Infected), 2);

        compartments.move_to(3, InfectionState::Recovered);
        assert_eq!(compartments.count(InfectionState::Infected), 1);
        assert_eq!(compartments.count(InfectionState::Recovered), 1);
        assert_eq!(
            compartments.indices_in(InfectionState::Susceptible).collect::<Vec<_>>(),
            vec![0, 2, 4]
        );
    }
}
