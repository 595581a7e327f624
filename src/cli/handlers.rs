//! Subcommand handlers. Each returns the process exit code.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::commands::{BatchArgs, ClassifyArgs, ConfigArgs, ProfilesArgs};
use super::output::{NamedResult, OutputFormatter};
use crate::classifier::{BatchClassifier, Classifier};
use crate::config::ClassifierConfig;
use crate::extractors::{ContainerEvidence, NamedContainer};
use crate::knowledge::KnowledgeBase;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

fn finish(result: Result<String>) -> i32 {
    match result {
        Ok(output) => {
            println!("{}", output);
            EXIT_SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            EXIT_FAILURE
        }
    }
}

fn load_knowledge_base() -> Result<Arc<KnowledgeBase>> {
    let kb = KnowledgeBase::load().context("Failed to load bundled knowledge base")?;
    Ok(Arc::new(kb))
}

pub fn handle_classify(args: &ClassifyArgs) -> i32 {
    finish(run_classify(args))
}

fn run_classify(args: &ClassifyArgs) -> Result<String> {
    let kb = load_knowledge_base()?;
    let classifier = Classifier::new(Arc::clone(&kb));

    let container = ContainerEvidence {
        image: args.image.clone(),
        ports: args.ports.iter().copied().collect(),
        env_vars: args.env.iter().cloned().collect(),
        labels: args.labels.iter().cloned().collect(),
    };

    let result = classifier.classify(&container);
    if let Some(advisory) = result.tier.advisory() {
        warn!(image = %container.image, score = result.score, "{}", advisory);
    }

    OutputFormatter::new(args.format.into()).format_result(&result, &kb)
}

pub async fn handle_batch(args: &BatchArgs) -> i32 {
    finish(run_batch(args).await)
}

/// Parses a batch file. JSON is a subset of YAML, so one parser covers both.
pub fn read_batch_file(path: &Path) -> Result<Vec<NamedContainer>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse batch file {}", path.display()))
}

async fn run_batch(args: &BatchArgs) -> Result<String> {
    // Only the worker count matters here; logging settings were already applied.
    let config = ClassifierConfig::default();
    let workers = args.workers.unwrap_or(config.workers);
    ClassifierConfig { workers, ..config }.validate()?;

    let named = read_batch_file(&args.input)?;
    let kb = load_knowledge_base()?;
    let (names, containers): (Vec<String>, Vec<ContainerEvidence>) =
        named.into_iter().map(|n| (n.name, n.evidence)).unzip();

    info!(
        containers = containers.len(),
        workers,
        input = %args.input.display(),
        "Classifying batch"
    );
    let results = BatchClassifier::new(Arc::clone(&kb))
        .classify(&containers, workers)
        .await?;

    let named_results: Vec<NamedResult> = names
        .into_iter()
        .zip(results)
        .map(|(name, result)| {
            if let Some(advisory) = result.tier.advisory() {
                warn!(container = %name, score = result.score, "{}", advisory);
            }
            NamedResult { name, result }
        })
        .collect();

    OutputFormatter::new(args.format.into()).format_batch(&named_results, &kb)
}

pub fn handle_profiles(args: &ProfilesArgs) -> i32 {
    finish(run_profiles(args))
}

fn run_profiles(args: &ProfilesArgs) -> Result<String> {
    let kb = load_knowledge_base()?;
    let profiles: Vec<_> = match &args.archetype {
        Some(archetype) => kb.profiles_for_archetype(archetype).collect(),
        None => kb.all_profiles().iter().collect(),
    };
    OutputFormatter::new(args.format.into()).format_profiles(&profiles)
}

pub fn handle_config(args: &ConfigArgs) -> i32 {
    finish(run_config(args))
}

fn run_config(args: &ConfigArgs) -> Result<String> {
    let config = ClassifierConfig::from_env()?;
    config.validate()?;
    OutputFormatter::new(args.format.into()).format_config(&config)
}
