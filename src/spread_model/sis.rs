use {
    rand::{Rng, distributions::Bernoulli},
    super::*,
    super::process::*
};

/// SIS dynamics: infected nodes become susceptible again with probability `b`.
pub struct SisProcess<'a, N>{
    network: &'a N,
    compartments: Compartments,
    infected_list: Vec<usize>,
    new_infected_list: Vec<usize>,
    recovered_list: Vec<usize>,
    transmission: Bernoulli,
    recovery: Bernoulli,
}

impl<'a, N> SisProcess<'a, N>
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
            recovered_list: Vec::new(),
            transmission,
            recovery
        }
    }
}

impl<'a, N> SpreadProcess for SisProcess<'a, N>
where N: Network
{
    type Curves = SiCurves;

    fn model_name(&self) -> &'static str
    {
        "SIS"
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
        debug_assert!(self.recovered_list.is_empty());
        collect_new_infections(
            self.network,
            &self.compartments,
            &self.transmission,
            rng,
            &mut self.new_infected_list
        );

        // infected_list still is the infected set from the start of the step
        let recovery = &self.recovery;
        let recovered_list = &mut self.recovered_list;
        self.infected_list.retain(
            |&index|
            {
                let recovers = rng.sample(recovery);
                if recovers{
                    recovered_list.push(index);
                }
                !recovers
            }
        );

        // recoveries first, then new infections
        for index in self.recovered_list.drain(..){
            self.compartments.move_to(index, InfectionState::Susceptible);
        }
        for &index in self.new_infected_list.iter(){
            self.compartments.move_to(index, InfectionState::Infected);
        }
        self.infected_list.append(&mut self.new_infected_list);
    }
}

/// SIS model for high and low centrality seeds, `b` is the probability of
/// becoming susceptible again.
pub fn simulate_sis<N, R>(
    network: &N,
    params: &SpreadParams,
    seeds: &SeedSets<N::Id>,
    rng: &mut R
) -> Result<Comparison<SiCurves>, SpreadError>
where N: Network,
    R: Rng + ?Sized
{
    let transmission = params.transmission_trial()?;
    let recovery = params.recovery_trial()?;
    let time_steps = params.checked_horizon()?;
    let seeds = SeedIndices::resolve(network, seeds)?;

    Ok(
        compare_strategies(
            SisProcess::new(network, &seeds.high_centrality, transmission, recovery),
            SisProcess::new(network, &seeds.low_centrality, transmission, recovery),
            time_steps,
            rng
        )
    )
}

#[cfg(test)]
mod tests{
    use {
        super::*,
        rand_pcg::Pcg64,
        rand::SeedableRng,
        proptest::prelude::*,
        crate::spread_model::test_networks::*
    };

    #[test]
    fn complete_graph_is_infected_within_one_step(){
        let network = complete_network(6);
        let params = SpreadParams::new(1.0, 0.0, 3);
        let seeds = SeedSets::new(vec![2], vec![]);
        let mut rng = Pcg64::seed_from_u64(11);

        let res = simulate_sis(&network, &params, &seeds, &mut rng).unwrap();
        assert_eq!(res.high_centrality.infected, vec![1, 6, 6, 6]);
        assert_eq!(res.low_centrality.infected, vec![0; 4]);
        assert_eq!(res.low_centrality.susceptible, vec![6; 4]);
    }

    #[test]
    fn certain_recovery_alternates_on_an_edge(){
        // the seed infects its neighbor and recovers in the same step
        let network = path_network(2);
        let params = SpreadParams::new(1.0, 1.0, 4);
        let seeds = SeedSets::new(vec![1], vec![1, 2]);
        let mut rng = Pcg64::seed_from_u64(12);

        let res = simulate_sis(&network, &params, &seeds, &mut rng).unwrap();
        assert_eq!(res.high_centrality.infected, vec![1; 5]);
        assert_eq!(res.high_centrality.susceptible, vec![1; 5]);
        // both infected, both recover, nobody left to transmit
        assert_eq!(res.low_centrality.infected, vec![2, 0, 0, 0, 0]);
    }

    #[test]
    fn no_transmission_only_recovers(){
        let network = star_network(4);
        let params = SpreadParams::new(0.0, 0.0, 5);
        let seeds = SeedSets::new(vec![0], vec![1, 2]);
        let mut rng = Pcg64::seed_from_u64(13);

        let res = simulate_sis(&network, &params, &seeds, &mut rng).unwrap();
        assert_eq!(res.high_centrality.infected, vec![1; 6]);
        assert_eq!(res.low_centrality.infected, vec![2; 6]);
    }

    #[test]
    fn recovery_probability_is_validated(){
        let network = path_network(2);
        let params = SpreadParams::new(0.5, 2.0, 5);
        let mut rng = Pcg64::seed_from_u64(14);

        let err = simulate_sis(&network, &params, &SeedSets::default(), &mut rng).unwrap_err();
        assert!(matches!(err, SpreadError::InvalidParameter{name: "recovery_prob", ..}));
    }

    proptest!{
        #[test]
        fn compartments_partition_the_network(
            (network, seeds) in network_with_seeds(),
            a in 0.0..=1.0_f64,
            b in 0.0..=1.0_f64,
            time_steps in 1_usize..15,
            rng_seed in any::<u64>()
        ){
            let params = SpreadParams::new(a, b, time_steps);
            let mut rng = Pcg64::seed_from_u64(rng_seed);
            let res = simulate_sis(&network, &params, &seeds, &mut rng).unwrap();

            for curves in [&res.high_centrality, &res.low_centrality]{
                for t in 0..=time_steps{
                    prop_assert_eq!(curves.population_at(t), network.node_count());
                }
            }
        }

        #[test]
        fn empty_seeds_never_infect(
            (network, _) in network_with_seeds(),
            a in 0.0..=1.0_f64,
            b in 0.0..=1.0_f64,
            rng_seed in any::<u64>()
        ){
            let params = SpreadParams::new(a, b, 6);
            let mut rng = Pcg64::seed_from_u64(rng_seed);
            let res = simulate_sis(&network, &params, &SeedSets::default(), &mut rng).unwrap();
            prop_assert!(res.high_centrality.infected.iter().all(|&i| i == 0));
            prop_assert!(res.low_centrality.susceptible.iter().all(|&s| s == network.node_count()));
        }
    }
}
