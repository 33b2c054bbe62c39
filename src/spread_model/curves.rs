//! Per time step counts of every tracked state.
//!
//! All curves have `time_steps + 1` entries, index 0 is the initial condition.

use serde::{Serialize, Deserialize};

/// Result of one spreading model for both seeding strategies.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Comparison<C>{
    pub high_centrality: C,
    pub low_centrality: C,
}

impl<C> Comparison<C>
where C: Summarize
{
    /// (high centrality, low centrality)
    pub fn summaries(&self) -> (SpreadSummary, SpreadSummary)
    {
        (self.high_centrality.summary(), self.low_centrality.summary())
    }
}

/// Condensed view of a single curve set
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpreadSummary{
    /// nodes reached by the process at the end of the horizon
    pub reached: usize,
    /// largest number of simultaneously infected (or currently activating) nodes
    pub peak: usize,
    /// first time step at which `peak` is attained
    pub peak_step: usize,
}

pub trait Summarize{
    fn summary(&self) -> SpreadSummary;
}

fn peak_of(curve: &[usize]) -> (usize, usize)
{
    curve.iter()
        .enumerate()
        .fold(
            (0, 0),
            |(best_step, best), (step, &val)|
            if val > best {(step, val)} else {(best_step, best)}
        )
}

/// Curves of the SI and the SIS model
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct SiCurves{
    pub susceptible: Vec<usize>,
    pub infected: Vec<usize>,
}

impl SiCurves{
    pub fn with_horizon(time_steps: usize) -> Self
    {
        Self{
            susceptible: vec![0; time_steps + 1],
            infected: vec![0; time_steps + 1]
        }
    }

    pub fn len(&self) -> usize
    {
        self.infected.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.infected.is_empty()
    }

    pub fn population_at(&self, t: usize) -> usize
    {
        self.susceptible[t] + self.infected[t]
    }
}

impl Summarize for SiCurves{
    fn summary(&self) -> SpreadSummary
    {
        let (peak_step, peak) = peak_of(&self.infected);
        SpreadSummary{
            reached: self.infected.last().copied().unwrap_or(0),
            peak,
            peak_step
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct SirCurves{
    pub susceptible: Vec<usize>,
    pub infected: Vec<usize>,
    pub recovered: Vec<usize>,
}

impl SirCurves{
    pub fn with_horizon(time_steps: usize) -> Self
    {
        Self{
            susceptible: vec![0; time_steps + 1],
            infected: vec![0; time_steps + 1],
            recovered: vec![0; time_steps + 1]
        }
    }

    pub fn len(&self) -> usize
    {
        self.infected.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.infected.is_empty()
    }

    pub fn population_at(&self, t: usize) -> usize
    {
        self.susceptible[t] + self.infected[t] + self.recovered[t]
    }

    /// Called C in the lockdown literature: infected or recovered
    pub fn ever_infected_at(&self, t: usize) -> usize
    {
        self.infected[t] + self.recovered[t]
    }
}

impl Summarize for SirCurves{
    fn summary(&self) -> SpreadSummary
    {
        let (peak_step, peak) = peak_of(&self.infected);
        let reached = match self.len(){
            0 => 0,
            len => self.ever_infected_at(len - 1)
        };
        SpreadSummary{
            reached,
            peak,
            peak_step
        }
    }
}

/// Curves of the independent cascade
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct CascadeCurves{
    pub inactive: Vec<usize>,
    pub active: Vec<usize>,
    /// size of the currently activating frontier, a subset of `active`
    pub activating: Vec<usize>,
}

impl CascadeCurves{
    pub fn with_horizon(time_steps: usize) -> Self
    {
        Self{
            inactive: vec![0; time_steps + 1],
            active: vec![0; time_steps + 1],
            activating: vec![0; time_steps + 1]
        }
    }

    pub fn len(&self) -> usize
    {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.active.is_empty()
    }

    /// The frontier is part of `active` and therefore not added
    pub fn population_at(&self, t: usize) -> usize
    {
        self.inactive[t] + self.active[t]
    }
}

impl Summarize for CascadeCurves{
    fn summary(&self) -> SpreadSummary
    {
        let (peak_step, peak) = peak_of(&self.activating);
        SpreadSummary{
            reached: self.active.last().copied().unwrap_or(0),
            peak,
            peak_step
        }
    }
}
