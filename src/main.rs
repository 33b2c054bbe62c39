use{
    std::{
        process::ExitCode,
        time::Instant
    },
    structopt::StructOpt,
    tracing::info,
    centrality_spread::{
        compare_seeds,
        cli_error::CliError,
        logging::init_logging
    }
};

fn main() -> ExitCode
{
    match run(){
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // logging may be the thing that failed
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError>
{
    init_logging()?;
    let start_time = Instant::now();
    let opt = CmdOption::from_args();
    match opt{
        CmdOption::CompareSeeds(o) => o.execute()?,
    }
    info!("Execution took {}", humantime::format_duration(start_time.elapsed()));
    Ok(())
}

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Epidemic spreading from high vs low centrality seeds!")]
pub enum CmdOption
{
    CompareSeeds(compare_seeds::CompareSeeds),
}
