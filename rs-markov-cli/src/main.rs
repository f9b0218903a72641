use rs_markov_core::config::Config;
use rs_markov_core::model::generator::TextGenerator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr, controlled by RUST_LOG
    env_logger::init();

    // Read the corpus from "./data/corpus.txt" and build the chain
    let config = Config::default();
    log::debug!("Using corpus {}", config.input_path.display());
    let generator = TextGenerator::new(config)?;

    // One random walk, one line of output
    println!("{}", generator.generate()?);

    Ok(())
}
