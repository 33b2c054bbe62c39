use {
    serde::{Serialize, Deserialize},
    rand::distributions::Bernoulli,
    super::{Network, SpreadError},
};

/// Probabilities and horizon shared by all spreading models.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SpreadParams{
    /// per edge and step, called `a`
    pub transmission_prob: f64,
    /// recovery (SIR) or re-susceptibility (SIS) per step, called `b`.
    /// Ignored by SI and the independent cascade
    pub recovery_prob: f64,
    /// number of steps `T`; every curve holds `T + 1` entries
    pub time_steps: usize,
}

impl SpreadParams{
    pub fn new(transmission_prob: f64, recovery_prob: f64, time_steps: usize) -> Self
    {
        Self{
            transmission_prob,
            recovery_prob,
            time_steps
        }
    }

    pub(crate) fn transmission_trial(&self) -> Result<Bernoulli, SpreadError>
    {
        Bernoulli::new(self.transmission_prob)
            .map_err(|_| SpreadError::probability("transmission_prob", self.transmission_prob))
    }

    pub(crate) fn recovery_trial(&self) -> Result<Bernoulli, SpreadError>
    {
        Bernoulli::new(self.recovery_prob)
            .map_err(|_| SpreadError::probability("recovery_prob", self.recovery_prob))
    }

    pub(crate) fn checked_horizon(&self) -> Result<usize, SpreadError>
    {
        if self.time_steps == 0 {
            Err(
                SpreadError::InvalidParameter{
                    name: "time_steps",
                    reason: "time horizon has to be positive".to_owned()
                }
            )
        } else {
            Ok(self.time_steps)
        }
    }
}

/// The two competing choices of initially infected (or active) nodes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct SeedSets<Id>{
    pub high_centrality: Vec<Id>,
    pub low_centrality: Vec<Id>,
}

impl<Id> SeedSets<Id>{
    pub fn new(high_centrality: Vec<Id>, low_centrality: Vec<Id>) -> Self
    {
        Self{
            high_centrality,
            low_centrality
        }
    }
}

/// Seed sets translated to dense node indices, duplicates removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SeedIndices{
    pub high_centrality: Vec<usize>,
    pub low_centrality: Vec<usize>,
}

impl SeedIndices{
    pub fn resolve<N>(network: &N, seeds: &SeedSets<N::Id>) -> Result<Self, SpreadError>
    where N: Network
    {
        Ok(
            Self{
                high_centrality: resolve_seed_list(network, &seeds.high_centrality)?,
                low_centrality: resolve_seed_list(network, &seeds.low_centrality)?
            }
        )
    }
}

fn resolve_seed_list<N>(network: &N, seeds: &[N::Id]) -> Result<Vec<usize>, SpreadError>
where N: Network
{
    let mut indices = seeds.iter()
        .map(
            |id|
            network.index_of(id)
                .ok_or_else(|| SpreadError::unknown_node(id))
        ).collect::<Result<Vec<_>, _>>()?;
    indices.sort_unstable();
    indices.dedup();
    Ok(indices)
}
