use {
    rand::{Rng, distributions::Bernoulli},
    super::*,
    super::process::*
};

/// Independent cascade.
///
/// Every node gets exactly one chance to activate each of its inactive
/// neighbors, in the step right after its own activation. Afterwards it
/// stays active but never propagates again.
pub struct CascadeProcess<'a, N>{
    network: &'a N,
    states: Vec<ActivationState>,
    /// nodes activated in the previous step, the only ones allowed to propagate
    activating_list: Vec<usize>,
    new_active_list: Vec<usize>,
    active_count: usize,
    transmission: Bernoulli,
}

impl<'a, N> CascadeProcess<'a, N>
where N: Network
{
    pub(crate) fn new(network: &'a N, seeds: &[usize], transmission: Bernoulli) -> Self
    {
        let mut states = vec![ActivationState::Inactive; network.node_count()];
        for &seed in seeds{
            states[seed] = ActivationState::Activating;
        }
        Self{
            network,
            states,
            activating_list: seeds.to_vec(),
            new_active_list: Vec::new(),
            active_count: seeds.len(),
            transmission
        }
    }

    pub fn state(&self, index: usize) -> ActivationState
    {
        self.states[index]
    }
}

impl<'a, N> SpreadProcess for CascadeProcess<'a, N>
where N: Network
{
    type Curves = CascadeCurves;

    fn model_name(&self) -> &'static str
    {
        "IC"
    }

    fn curves_for_horizon(time_steps: usize) -> CascadeCurves
    {
        CascadeCurves::with_horizon(time_steps)
    }

    fn record(&self, curves: &mut CascadeCurves, t: usize)
    {
        curves.inactive[t] = self.states.len() - self.active_count;
        curves.active[t] = self.active_count;
        curves.activating[t] = self.activating_list.len();
    }

    fn propagate_one_time_step<R>(&mut self, rng: &mut R)
    where R: Rng + ?Sized
    {
        debug_assert!(self.new_active_list.is_empty());
        for &index in self.activating_list.iter(){
            for n_index in self.network.neighbors(index){
                if self.states[n_index].inactive_check() && rng.sample(self.transmission){
                    self.new_active_list.push(n_index);
                }
            }
        }
        // several sources may hit the same node
        self.new_active_list.sort_unstable();
        self.new_active_list.dedup();

        for index in self.activating_list.drain(..){
            self.states[index] = ActivationState::Active;
        }
        for &index in self.new_active_list.iter(){
            self.states[index] = ActivationState::Activating;
        }
        self.active_count += self.new_active_list.len();
        std::mem::swap(&mut self.activating_list, &mut self.new_active_list);
    }
}

/// Independent cascade for high and low centrality seeds.
/// Seeds form the activating frontier of the first step.
pub fn simulate_ic<N, R>(
    network: &N,
    params: &SpreadParams,
    seeds: &SeedSets<N::Id>,
    rng: &mut R
) -> Result<Comparison<CascadeCurves>, SpreadError>
where N: Network,
    R: Rng + ?Sized
{
    let transmission = params.transmission_trial()?;
    let time_steps = params.checked_horizon()?;
    let seeds = SeedIndices::resolve(network, seeds)?;

    Ok(
        compare_strategies(
            CascadeProcess::new(network, &seeds.high_centrality, transmission),
            CascadeProcess::new(network, &seeds.low_centrality, transmission),
            time_steps,
            rng
        )
    )
}
