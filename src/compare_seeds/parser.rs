use{
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    std::{num::*, io::stdout},
    crate::{
        cli_error::CliError,
        json_parsing::*,
        misc_types::*,
        spread_model::*,
    },
};

#[derive(Debug, StructOpt, Clone)]
/// Spread from high and from low centrality seeds on the same network and compare the curves
pub struct CompareSeeds
{
    /// Specify the json file with the options.
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,
}

impl CompareSeeds {
    pub fn execute(&self) -> Result<(), CliError>
    {
        match self.json.as_ref(){
            None => {
                write_example::<CompareSeedsParam, _>(stdout())?;
                println!();
                Ok(())
            },
            Some(file) => {
                let (param, json) = parse_file(file)?;
                let report = super::execute::execute_comparison(param, json)?;
                serde_json::to_writer_pretty(stdout(), &report)
                    .map_err(CliError::Report)?;
                println!();
                Ok(())
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CompareSeedsParam
{
    pub model: SpreadModel,
    pub graph_type: GraphType,
    pub system_size: NonZeroUsize,
    pub transmission_prob: f64,
    /// only used by SIS and SIR
    pub recovery_prob: f64,
    pub time_steps: usize,
    /// node indices of the network
    pub seeds: SeedSets<usize>,
    pub graph_seed: u64,
    pub spread_seed: u64,
}

impl CompareSeedsParam
{
    pub fn spread_params(&self) -> SpreadParams
    {
        SpreadParams::new(self.transmission_prob, self.recovery_prob, self.time_steps)
    }

    pub fn quick_name(&self) -> String
    {
        format!(
            "v{}Compare{}Rec{}Trans{}N{}T{}Graph{}GS{}SS{}",
            crate::VERSION,
            self.model.name(),
            self.recovery_prob,
            self.transmission_prob,
            self.system_size,
            self.time_steps,
            self.graph_type.name(),
            self.graph_seed,
            self.spread_seed
        )
    }
}

impl Default for CompareSeedsParam
{
    fn default() -> Self {
        Self{
            model: SpreadModel::Sir,
            graph_type: GraphType::default(),
            system_size: DEFAULT_SYSTEM_SIZE,
            transmission_prob: DEFAULT_TRANSMISSION_PROB,
            recovery_prob: DEFAULT_RECOVERY_PROB,
            time_steps: DEFAULT_TIME_STEPS,
            seeds: SeedSets::new(vec![0, 1], vec![100, 101]),
            graph_seed: DEFAULT_GRAPH_SEED,
            spread_seed: DEFAULT_SPREAD_SEED
        }
    }
}
