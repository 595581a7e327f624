use workload_classifier::cli::commands::{CliArgs, Commands};
use workload_classifier::cli::handlers::{
    handle_batch, handle_classify, handle_config, handle_profiles,
};
use workload_classifier::config::ClassifierConfig;
use workload_classifier::util::logging::{init_logging, parse_level, LoggingConfig};
use workload_classifier::VERSION;

use clap::Parser;
use tracing::{debug, Level};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("workload-classifier v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Classify(classify_args) => handle_classify(classify_args),
        Commands::Batch(batch_args) => handle_batch(batch_args).await,
        Commands::Profiles(profiles_args) => handle_profiles(profiles_args),
        Commands::Config(config_args) => handle_config(config_args),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let mut logging = LoggingConfig::from(&ClassifierConfig::default());

    if let Some(level_str) = &args.log_level {
        logging.level = parse_level(level_str);
    } else if args.verbose {
        logging.level = Level::DEBUG;
    } else if args.quiet {
        logging.level = Level::ERROR;
    }

    init_logging(logging);
}
