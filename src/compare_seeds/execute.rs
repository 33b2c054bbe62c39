use {
    super::parser::*,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    rand_pcg::Pcg64,
    rand::SeedableRng,
    tracing::{info, debug},
    crate::{
        misc_types::GraphType,
        spread_model::*,
    },
};

/// Everything written to stdout after a comparison
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SpreadReport{
    pub version: String,
    pub name: String,
    pub config: Value,
    pub high_centrality_summary: SpreadSummary,
    pub low_centrality_summary: SpreadSummary,
    pub outcome: SpreadOutcome,
}

pub fn execute_comparison(param: CompareSeedsParam, json: Value) -> Result<SpreadReport, SpreadError>
{
    let options = NetworkOptions::new(param.system_size, param.graph_seed);
    let outcome = match param.graph_type{
        GraphType::SmallWorld(rewire_prob) => {
            let network = options.small_world(rewire_prob)?;
            run_on(&network, &param)?
        },
        GraphType::Barabasi(m, source_n) => {
            let network = options.barabasi(m, source_n)?;
            run_on(&network, &param)?
        }
    };

    let (high, low) = outcome.summaries();
    info!(
        model = param.model.name(),
        reached = high.reached,
        peak = high.peak,
        peak_step = high.peak_step,
        "high centrality seeds"
    );
    info!(
        model = param.model.name(),
        reached = low.reached,
        peak = low.peak,
        peak_step = low.peak_step,
        "low centrality seeds"
    );

    Ok(
        SpreadReport{
            version: crate::VERSION.to_owned(),
            name: param.quick_name(),
            config: json,
            high_centrality_summary: high,
            low_centrality_summary: low,
            outcome
        }
    )
}

fn run_on<N>(network: &N, param: &CompareSeedsParam) -> Result<SpreadOutcome, SpreadError>
where N: Network<Id = usize>
{
    info!(
        graph = %param.graph_type.name(),
        nodes = network.node_count(),
        high_seeds = param.seeds.high_centrality.len(),
        low_seeds = param.seeds.low_centrality.len(),
        "network ready"
    );
    if !param.model.uses_recovery(){
        debug!(
            model = param.model.name(),
            recovery_prob = param.recovery_prob,
            "recovery probability is ignored"
        );
    }
    let mut rng = Pcg64::seed_from_u64(param.spread_seed);
    simulate(param.model, network, &param.spread_params(), &param.seeds, &mut rng)
}

#[cfg(test)]
mod tests{
    use {
        super::*,
        std::num::NonZeroUsize
    };

    fn small_param(model: SpreadModel) -> CompareSeedsParam
    {
        CompareSeedsParam{
            model,
            system_size: NonZeroUsize::new(30).unwrap(),
            time_steps: 10,
            seeds: SeedSets::new(vec![0], vec![15, 16]),
            ..CompareSeedsParam::default()
        }
    }

    #[test]
    fn report_holds_curves_of_the_requested_model(){
        let param = small_param(SpreadModel::IndependentCascade);
        let json = serde_json::to_value(&param).unwrap();
        let report = execute_comparison(param, json.clone()).unwrap();

        assert_eq!(report.config, json);
        assert_eq!(report.outcome.model(), SpreadModel::IndependentCascade);
        match report.outcome{
            SpreadOutcome::IndependentCascade(c) => {
                assert_eq!(c.high_centrality.len(), 11);
                assert_eq!(c.low_centrality.active[0], 2);
                assert!((0..=10).all(|t| c.high_centrality.population_at(t) == 30));
            },
            other => panic!("unexpected outcome {other:?}")
        }
    }

    #[test]
    fn same_seed_gives_same_report(){
        let param = CompareSeedsParam{
            graph_type: GraphType::Barabasi(2, 3),
            ..small_param(SpreadModel::Sir)
        };
        let a = execute_comparison(param.clone(), Value::Null).unwrap();
        let b = execute_comparison(param, Value::Null).unwrap();
        assert_eq!(a.outcome, b.outcome);
    }

    #[test]
    fn seed_outside_network_is_reported(){
        let param = CompareSeedsParam{
            seeds: SeedSets::new(vec![30], vec![]),
            ..small_param(SpreadModel::Si)
        };
        let err = execute_comparison(param, Value::Null).unwrap_err();
        assert_eq!(err, SpreadError::UnknownNode{node: "30".to_owned()});
    }
}
