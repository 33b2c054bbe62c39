use {
    rand::{Rng, distributions::Bernoulli},
    super::*,
    super::process::*
};

/// SI dynamics: susceptible nodes get infected and stay infected forever.
pub struct SiProcess<'a, N>{
    network: &'a N,
    compartments: Compartments,
    new_infected_list: Vec<usize>,
    transmission: Bernoulli,
}

impl<'a, N> SiProcess<'a, N>
where N: Network
{
    pub(crate) fn new(network: &'a N, seeds: &[usize], transmission: Bernoulli) -> Self
    {
        Self{
            network,
            compartments: Compartments::seeded(network.node_count(), seeds),
            new_infected_list: Vec::new(),
            transmission
        }
    }
}

impl<'a, N> SpreadProcess for SiProcess<'a, N>
where N: Network
{
    type Curves = SiCurves;

    fn model_name(&self) -> &'static str
    {
        "SI"
    }

    fn curves_for_horizon(time_steps: usize) -> SiCurves
    {
        SiCurves::with_horizon(time_steps)
    }

    fn record(&self, curves: &mut SiCurves, t: usize)
    {
        curves.susceptible[t] = self.compartments.count(InfectionState::Susceptible);
        curves.infected[t] = self.compartments.count(InfectionState::Infected);
    }

    fn propagate_one_time_step<R>(&mut self, rng: &mut R)
    where R: Rng + ?Sized
    {
        collect_new_infections(
            self.network,
            &self.compartments,
            &self.transmission,
            rng,
            &mut self.new_infected_list
        );
        for index in self.new_infected_list.drain(..){
            self.compartments.move_to(index, InfectionState::Infected);
        }
    }
}

/// SI model for high and low centrality seeds.
///
/// Returns (S_HC, I_HC) and (S_LC, I_LC) as [`SiCurves`]
pub fn simulate_si<N, R>(
    network: &N,
    params: &SpreadParams,
    seeds: &SeedSets<N::Id>,
    rng: &mut R
) -> Result<Comparison<SiCurves>, SpreadError>
where N: Network,
    R: Rng + ?Sized
{
    let transmission = params.transmission_trial()?;
    let time_steps = params.checked_horizon()?;
    let seeds = SeedIndices::resolve(network, seeds)?;

    Ok(
        compare_strategies(
            SiProcess::new(network, &seeds.high_centrality, transmission),
            SiProcess::new(network, &seeds.low_centrality, transmission),
            time_steps,
            rng
        )
    )
}
