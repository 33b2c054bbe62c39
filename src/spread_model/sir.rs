use {
    rand::{Rng, distributions::Bernoulli},
    super::*,
    super::process::*
};

/// SIR dynamics. Recovered is absorbing: recovered nodes neither transmit
/// nor can they be infected again.
pub struct SirProcess<'a, N>{
    network: &'a N,
    compartments: Compartments,
    infected_list: Vec<usize>,
    new_infected_list: Vec<usize>,
    transmission: Bernoulli,
    recovery: Bernoulli,
}

impl<'a, N> SirProcess<'a, N>
where N: Network
{
    pub(crate) fn new(
        network: &'a N,
        seeds: &[usize],
        transmission: Bernoulli,
        recovery: Bernoulli
    ) -> Self
    {
        Self{
            network,
            compartments: Compartments::seeded(network.node_count(), seeds),
            infected_list: seeds.to_vec(),
            new_infected_list: Vec::new(),
            transmission,
            recovery
        }
    }
}

impl<'a, N> SpreadProcess for SirProcess<'a, N>
where N: Network
{
    type Curves = SirCurves;

    fn model_name(&self) -> &'static str
    {
        "SIR"
    }

    fn curves_for_horizon(time_steps: usize) -> SirCurves
    {
        SirCurves::with_horizon(time_steps)
    }

    fn record(&self, curves: &mut SirCurves, t: usize)
    {
        curves.susceptible[t] = self.compartments.count(InfectionState::Susceptible);
        curves.infected[t] = self.compartments.count(InfectionState::Infected);
        curves.recovered[t] = self.compartments.count(InfectionState::Recovered);
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

        // Recoveries only concern nodes that were infected at the start of the
        // step, the newly infected are appended afterwards.
        for i in (0..self.infected_list.len()).rev(){
            if rng.sample(self.recovery){
                let removed_index = self.infected_list.swap_remove(i);
                self.compartments.move_to(removed_index, InfectionState::Recovered);
            }
        }
        for &index in self.new_infected_list.iter(){
            self.compartments.move_to(index, InfectionState::Infected);
        }
        self.infected_list.append(&mut self.new_infected_list);
    }
}

/// SIR model for high and low centrality seeds, `b` is the recovery probability.
pub fn simulate_sir<N, R>(
    network: &N,
    params: &SpreadParams,
    seeds: &SeedSets<N::Id>,
    rng: &mut R
) -> Result<Comparison<SirCurves>, SpreadError>
where N: Network,
    R: Rng + ?Sized
{
    let transmission = params.transmission_trial()?;
    let recovery = params.recovery_trial()?;
    let time_steps = params.checked_horizon()?;
    let seeds = SeedIndices::resolve(network, seeds)?;

    Ok(
        compare_strategies(
            SirProcess::new(network, &seeds.high_centrality, transmission, recovery),
            SirProcess::new(network, &seeds.low_centrality, transmission, recovery),
            time_steps,
            rng
        )
    )
}
