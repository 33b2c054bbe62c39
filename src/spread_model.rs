//! Spreading processes seeded from high and low centrality nodes.
//!
//! All four models (SI, SIS, SIR and the independent cascade) share the same
//! substrate: a read-only [`Network`], two seed sets and a time horizon. Each
//! model runs once per seed set and reports the size of every state after
//! every step.

pub mod error;
pub use error::*;

pub mod spread_states;
pub use spread_states::*;

pub mod network;
pub use network::*;

pub mod params;
pub use params::*;

pub mod curves;
pub use curves::*;

pub mod process;
pub use process::{SpreadProcess, propagate_until_horizon};

pub mod si;
pub use si::*;

pub mod sis;
pub use sis::*;

pub mod sir;
pub use sir::*;

pub mod ic;
pub use ic::*;

pub mod graph_options;
pub use graph_options::*;

#[cfg(test)]
pub(crate) mod test_networks;

use {
    serde::{Serialize, Deserialize},
    rand::Rng
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpreadModel{
    Si,
    Sis,
    Sir,
    IndependentCascade,
}

impl SpreadModel{
    pub fn name(self) -> &'static str
    {
        match self{
            Self::Si => "SI",
            Self::Sis => "SIS",
            Self::Sir => "SIR",
            Self::IndependentCascade => "IC"
        }
    }

    /// SI and the cascade do not use the recovery probability
    pub fn uses_recovery(self) -> bool
    {
        matches!(self, Self::Sis | Self::Sir)
    }
}

/// Curves of whichever model was simulated
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum SpreadOutcome{
    Si(Comparison<SiCurves>),
    Sis(Comparison<SiCurves>),
    Sir(Comparison<SirCurves>),
    IndependentCascade(Comparison<CascadeCurves>),
}

impl SpreadOutcome{
    pub fn model(&self) -> SpreadModel
    {
        match self{
            Self::Si(_) => SpreadModel::Si,
            Self::Sis(_) => SpreadModel::Sis,
            Self::Sir(_) => SpreadModel::Sir,
            Self::IndependentCascade(_) => SpreadModel::IndependentCascade
        }
    }

    /// (high centrality, low centrality)
    pub fn summaries(&self) -> (SpreadSummary, SpreadSummary)
    {
        match self{
            Self::Si(c) | Self::Sis(c) => c.summaries(),
            Self::Sir(c) => c.summaries(),
            Self::IndependentCascade(c) => c.summaries()
        }
    }
}

/// Runs `model` for both seed sets.
pub fn simulate<N, R>(
    model: SpreadModel,
    network: &N,
    params: &SpreadParams,
    seeds: &SeedSets<N::Id>,
    rng: &mut R
) -> Result<SpreadOutcome, SpreadError>
where N: Network,
    R: Rng + ?Sized
{
    let outcome = match model{
        SpreadModel::Si => SpreadOutcome::Si(simulate_si(network, params, seeds, rng)?),
        SpreadModel::Sis => SpreadOutcome::Sis(simulate_sis(network, params, seeds, rng)?),
        SpreadModel::Sir => SpreadOutcome::Sir(simulate_sir(network, params, seeds, rng)?),
        SpreadModel::IndependentCascade => {
            SpreadOutcome::IndependentCascade(simulate_ic(network, params, seeds, rng)?)
        }
    };
    Ok(outcome)
}
