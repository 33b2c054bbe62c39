use{
    serde::{Serialize, Deserialize},
    std::num::*,
};

pub const DEFAULT_SYSTEM_SIZE: NonZeroUsize = match NonZeroUsize::new(200){
    Some(n) => n,
    None => panic!("default system size has to be positive")
};
pub const DEFAULT_TRANSMISSION_PROB: f64 = 0.1763;
pub const DEFAULT_RECOVERY_PROB: f64 = 0.14;
pub const DEFAULT_TIME_STEPS: usize = 50;
pub const DEFAULT_GRAPH_SEED: u64 = 875629289;
pub const DEFAULT_SPREAD_SEED: u64 = 1489264107025;
pub const DEFAULT_REWIRE_PROB: f64 = 0.1;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum GraphType{
    /// rewiring probability
    SmallWorld(f64),
    /// m, source_n
    Barabasi(usize,usize),
}

impl GraphType{
    pub fn name(&self) -> String
    {
        match self
        {
            Self::SmallWorld(p) => format!("sw{}", p),
            Self::Barabasi(q,r) => format!("ba{}{}",q,r),
        }
    }
}

impl Default for GraphType{
    fn default() -> Self{
        GraphType::SmallWorld(DEFAULT_REWIRE_PROB)
    }
}
