mod analysis;
mod config;
mod report;

use std::error::Error;
use std::path::PathBuf;

use analysis::run_analysis;
use config::ModelConfig;
use report::render_summary;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "beamx",
    about = "Solves a chain of Euler-Bernoulli beam elements and reports internal forces"
)]
struct Options {
    /// JSON model file; a simply supported demonstration beam is used when omitted
    #[structopt(parse(from_os_str))]
    model: Option<PathBuf>,

    /// Split every span into this many elements
    #[structopt(short, long)]
    elements: Option<usize>,

    /// Print every result sequence as JSON instead of the text report
    #[structopt(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let options = Options::from_args();

    // Read the spans, supports and loads. Without a file we fall back to the
    // textbook simply supported beam so the output can be checked by hand.
    let mut config = match &options.model {
        Some(path) => ModelConfig::from_file(path)?,
        None => ModelConfig::default(),
    };
    if let Some(elements) = options.elements {
        config = config.with_elements(elements);
    }

    // Discretize, assemble and solve the chain, then collect the node values.
    let summary = run_analysis(&config)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&summary.results)?);
    } else {
        println!("{}", render_summary(&summary));
    }

    Ok(())
}
