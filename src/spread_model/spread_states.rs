use {
    serde::{Serialize, Deserialize},
    net_ensembles::Node
};

#[derive(Clone, Debug, PartialEq, Eq, Copy, Default)]
#[derive(Serialize, Deserialize)]
pub enum InfectionState{
    #[default]
    Susceptible,
    Infected,
    Recovered,
}

impl InfectionState{
    pub fn inf_check(&self) -> bool{
        matches!(self, InfectionState::Infected)
    }

    /// position inside the per state count array
    pub(crate) fn slot(self) -> usize
    {
        match self{
            Self::Susceptible => 0,
            Self::Infected => 1,
            Self::Recovered => 2
        }
    }
}

// lets the state double as vertex payload of net_ensembles graphs
impl Node for InfectionState{
    fn new_from_index(_index: usize) -> Self{
        InfectionState::Susceptible
    }
}

/// Independent cascade state of a single node.
///
/// `Activating` is the "currently activating" marker: the node became active
/// in the step that just finished and is the only kind of node allowed to
/// make activation attempts in the next step. It counts as active.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Default)]
#[derive(Serialize, Deserialize)]
pub enum ActivationState{
    #[default]
    Inactive,
    Activating,
    Active,
}

impl ActivationState{
    pub fn inactive_check(&self) -> bool{
        matches!(self, Self::Inactive)
    }

    pub fn activating_check(&self) -> bool{
        matches!(self, Self::Activating)
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn every_infection_state_has_its_own_slot(){
        let slots = [
            InfectionState::Susceptible.slot(),
            InfectionState::Infected.slot(),
            InfectionState::Recovered.slot()
        ];
        assert_eq!(slots, [0, 1, 2]);
        assert!(!InfectionState::Recovered.inf_check());
    }

    #[test]
    fn only_the_frontier_is_activating(){
        assert!(ActivationState::Activating.activating_check());
        assert!(!ActivationState::Active.activating_check());
        assert!(!ActivationState::Active.inactive_check());
        assert!(ActivationState::Inactive.inactive_check());
    }
}
