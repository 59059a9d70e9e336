use cptsim::analysis::{analyze_batch, AnalysisReport, SoundingInput};
use cptsim::base::{read_json, Config, CptError, Samples, DEFAULT_OUT_DIR};
use cptsim::classification::ClassificationMethod;
use cptsim::settlement::{LoadConfig, SettlementEngine, SettlementOptions};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "cptsim",
    about = "Interprets CPT soundings and estimates the settlement of a footing"
)]
struct Options {
    /// Sounding JSON files: {"name", "location"?, "samples": [{depth, qc, fs, u2?}]}
    files: Vec<String>,

    /// Analyzes the built-in five-strata sounding
    #[structopt(long)]
    demo: bool,

    /// Analysis configuration JSON file
    #[structopt(long)]
    config: Option<String>,

    /// Output directory
    #[structopt(long, default_value = DEFAULT_OUT_DIR)]
    out_dir: String,

    /// Applied load (kN)
    #[structopt(long, default_value = "1000.0")]
    load: f64,

    /// Footing width B (m)
    #[structopt(long, default_value = "2.0")]
    width: f64,

    /// Footing length L (m)
    #[structopt(long, default_value = "2.0")]
    length: f64,

    /// Footing depth below the ground surface (m)
    #[structopt(long, default_value = "1.0")]
    footing_depth: f64,

    /// First classification method to compare
    #[structopt(long, default_value = "Robertson2009")]
    method1: ClassificationMethod,

    /// Second classification method to compare
    #[structopt(long, default_value = "Robertson1990")]
    method2: ClassificationMethod,

    /// Time span of the settlement curve (years)
    #[structopt(long, default_value = "50.0")]
    max_time: f64,

    /// Ignores the secondary compression
    #[structopt(long)]
    no_secondary: bool,

    /// Ratio Cα/Cc of the secondary compression
    #[structopt(long, default_value = "0.02")]
    c_alpha: f64,

    /// Degree of consolidation for the consolidation times
    #[structopt(long, default_value = "0.9")]
    target_degree: f64,

    /// Shows debug messages
    #[structopt(short, long)]
    verbose: bool,

    /// Shows error messages only
    #[structopt(short, long)]
    quiet: bool,
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env("CPTSIM_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() -> Result<(), CptError> {
    // parse options
    let options = Options::from_args();
    init_tracing(options.quiet, options.verbose);

    // configuration
    let config = match &options.config {
        Some(path) => {
            let config: Config = read_json(path)?;
            config.validate()?;
            config
        }
        None => Config::new(),
    };

    // settlement engine
    let load = LoadConfig::new(
        options.load,
        options.width,
        options.length,
        options.footing_depth,
        config.water_table_depth,
    )?;
    let mut settlement_options = SettlementOptions::new();
    settlement_options
        .set_gamma_soil(config.gamma_soil)?
        .set_max_time_years(options.max_time)?
        .set_secondary(if options.no_secondary {
            None
        } else {
            Some(options.c_alpha)
        })?;
    let engine = SettlementEngine::new(load, settlement_options)?;

    // load data
    let mut inputs = Vec::with_capacity(options.files.len() + 1);
    for path in &options.files {
        inputs.push(SoundingInput::read(path)?);
    }
    if options.demo {
        inputs.push(SoundingInput::new("demo", Samples::raw_five_strata()));
    }
    if inputs.is_empty() {
        return Err(CptError::InputValidation("at least one sounding file (or --demo) is required"));
    }

    // run analyses
    let analyses = analyze_batch(&inputs, &config)?;
    let methods = (options.method1, options.method2);
    for analysis in &analyses {
        let report = AnalysisReport::new(analysis, &engine, methods, options.target_degree)?;
        let path = report.write(&options.out_dir)?;

        // message
        let thin_line = format!("{:─^1$}", "", path.len());
        println!("\n{}", thin_line);
        print!("{}", report);
        println!("{}", thin_line);
        println!("results written to:");
        println!("{}", path);
        println!("{}\n", thin_line);
    }
    Ok(())
}
