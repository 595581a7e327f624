use crate::knowledge::Archetype;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Evidence-based technology classification for Kubernetes containers
#[derive(Parser, Debug)]
#[command(
    name = "workload-classifier",
    about = "Evidence-based technology classification for Kubernetes containers",
    version,
    author,
    long_about = "workload-classifier inspects a container's image, ports, environment \
                  variable names and labels, accumulates weighted evidence against a \
                  bundled knowledge base of technology profiles, and reports the most \
                  likely technology with a confidence score and tier."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Classify a single container",
        long_about = "Classifies one container from its declared metadata.\n\n\
                      Examples:\n  \
                      workload-classifier classify --image postgres:15 --port 5432\n  \
                      workload-classifier classify --image bitnami/redis:7.2 --env REDIS_PASSWORD\n  \
                      workload-classifier classify --image acme/api:1.0 --label app.kubernetes.io/name=nginx -f json"
    )]
    Classify(ClassifyArgs),

    #[command(
        about = "Classify every container in a YAML or JSON file",
        long_about = "Reads a list of named containers and classifies them concurrently. \
                      Results keep the order of the input file.\n\n\
                      Examples:\n  \
                      workload-classifier batch containers.yaml\n  \
                      workload-classifier batch containers.json --workers 4 -f yaml"
    )]
    Batch(BatchArgs),

    #[command(about = "List the technology profiles in the knowledge base")]
    Profiles(ProfilesArgs),

    #[command(about = "Show resolved configuration")]
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    #[arg(
        short = 'i',
        long,
        value_name = "IMAGE",
        default_value = "",
        help = "Full image reference, tag included"
    )]
    pub image: String,

    #[arg(short = 'p', long = "port", value_name = "PORT", help = "Declared container port (repeatable)")]
    pub ports: Vec<u16>,

    #[arg(
        short = 'e',
        long = "env",
        value_name = "NAME[=VALUE]",
        value_parser = parse_env_var,
        help = "Environment variable (repeatable)"
    )]
    pub env: Vec<(String, String)>,

    #[arg(
        short = 'l',
        long = "label",
        value_name = "KEY=VALUE",
        value_parser = parse_label,
        help = "Kubernetes label (repeatable)"
    )]
    pub labels: Vec<(String, String)>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    #[arg(value_name = "FILE", help = "YAML or JSON list of named containers")]
    pub input: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'w',
        long,
        value_name = "N",
        help = "Worker tasks (defaults to WORKLOAD_CLASSIFIER_WORKERS or available parallelism)"
    )]
    pub workers: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct ProfilesArgs {
    #[arg(
        short = 'a',
        long,
        value_name = "ARCHETYPE",
        value_parser = parse_archetype,
        help = "Only list profiles of this archetype"
    )]
    pub archetype: Option<Archetype>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

fn parse_env_var(s: &str) -> Result<(String, String), String> {
    let (name, value) = s.split_once('=').unwrap_or((s, ""));
    if name.is_empty() {
        return Err(format!("Invalid env var '{}': name must not be empty", s));
    }
    Ok((name.to_string(), value.to_string()))
}

fn parse_label(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("Invalid label '{}': expected KEY=VALUE", s)),
    }
}

fn parse_archetype(s: &str) -> Result<Archetype, String> {
    Archetype::from_name(s)
        .filter(Archetype::is_assignable)
        .ok_or_else(|| {
            let valid: Vec<_> = Archetype::all_variants()
                .iter()
                .filter(|a| a.is_assignable())
                .map(|a| a.as_str())
                .collect();
            format!("Invalid archetype: {}. Valid options: {}", s, valid.join(", "))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_classify_defaults() {
        let args = CliArgs::parse_from(["workload-classifier", "classify", "--image", "redis:7"]);
        match args.command {
            Commands::Classify(classify) => {
                assert_eq!(classify.image, "redis:7");
                assert!(classify.ports.is_empty());
                assert!(classify.env.is_empty());
                assert_eq!(classify.format, OutputFormatArg::Human);
            }
            _ => panic!("Expected Classify command"),
        }
    }

    #[test]
    fn test_classify_with_repeated_signals() {
        let args = CliArgs::parse_from([
            "workload-classifier",
            "classify",
            "--image",
            "postgres:15",
            "--port",
            "5432",
            "-p",
            "9187",
            "--env",
            "POSTGRES_DB=app",
            "--env",
            "PGDATA",
            "--label",
            "app.kubernetes.io/name=postgresql",
            "-f",
            "json",
        ]);
        match args.command {
            Commands::Classify(classify) => {
                assert_eq!(classify.ports, vec![5432, 9187]);
                assert_eq!(
                    classify.env,
                    vec![
                        ("POSTGRES_DB".to_string(), "app".to_string()),
                        ("PGDATA".to_string(), String::new())
                    ]
                );
                assert_eq!(classify.labels.len(), 1);
                assert_eq!(classify.format, OutputFormatArg::Json);
            }
            _ => panic!("Expected Classify command"),
        }
    }

    #[test]
    fn test_classify_rejects_malformed_label() {
        let result = CliArgs::try_parse_from([
            "workload-classifier",
            "classify",
            "--label",
            "no-equals-sign",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_batch_command() {
        let args = CliArgs::parse_from([
            "workload-classifier",
            "batch",
            "containers.yaml",
            "--workers",
            "4",
        ]);
        match args.command {
            Commands::Batch(batch) => {
                assert_eq!(batch.input, PathBuf::from("containers.yaml"));
                assert_eq!(batch.workers, Some(4));
            }
            _ => panic!("Expected Batch command"),
        }
    }

    #[test]
    fn test_profiles_archetype_filter() {
        let args = CliArgs::parse_from([
            "workload-classifier",
            "profiles",
            "--archetype",
            "message-queue",
        ]);
        match args.command {
            Commands::Profiles(profiles) => {
                assert_eq!(profiles.archetype, Some(Archetype::MessageQueue));
            }
            _ => panic!("Expected Profiles command"),
        }
    }

    #[test]
    fn test_profiles_rejects_reserved_archetype() {
        assert!(parse_archetype("unknown").is_err());
        assert!(parse_archetype("mainframe").is_err());
        assert_eq!(parse_archetype("db"), Ok(Archetype::Database));
    }

    #[test]
    fn test_global_flags() {
        let args = CliArgs::parse_from(["workload-classifier", "-v", "config"]);
        assert!(args.verbose);
        assert!(!args.quiet);

        let args = CliArgs::parse_from(["workload-classifier", "--log-level", "debug", "config"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = CliArgs::try_parse_from(["workload-classifier", "-q", "-v", "config"]);
        assert!(result.is_err());
    }
}
