use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kbdiag::config::ReportFormat;
use kbdiag::report::{format_trace, ConsoleReporter, JsonReporter};
use kbdiag::{load_knowledge_base, Config, DiagnosticAgent, KnowledgeBase, Reporter, Strategy};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Knowledge-based diagnostic agent: searches a symptom graph toward a diagnosis.
#[derive(Parser, Debug)]
#[command(name = "kbdiag", version)]
struct Cli {
    /// Knowledge base file (.json, .yaml, .toml, .kb, .txt). Overrides the config file.
    #[arg(long, global = true)]
    kb: Option<PathBuf>,

    /// Goal diagnosis node. Overrides the config file.
    #[arg(long, global = true)]
    goal: Option<String>,

    /// Output format. Overrides the config file.
    #[arg(long, global = true, value_enum)]
    format: Option<ReportFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Try each symptom in order until one reaches the goal
    Diagnose {
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,

        /// Reported symptoms, tried in the order given
        #[arg(required = true)]
        symptoms: Vec<String>,
    },
    /// Run a single search between two nodes
    Search {
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,

        #[arg(long)]
        from: String,

        /// Target node (defaults to the goal)
        #[arg(long)]
        to: Option<String>,
    },
    /// Run the demonstration patients with both strategies
    Demo,
    /// List the knowledge base
    Nodes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    // Logs go to stderr; stdout carries the report only
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", config.agent.log_level.as_str()),
    )
    .init();

    let kb = match cli.kb.as_deref().or(config.knowledge_base_path()) {
        Some(path) => load_knowledge_base(path)
            .with_context(|| format!("Failed to load knowledge base: {}", path.display()))?,
        None => {
            log::debug!("Using built-in anemia knowledge base");
            KnowledgeBase::anemia()
        }
    };

    let goal = cli.goal.clone().unwrap_or_else(|| config.agent.goal.clone());
    if goal.trim().is_empty() {
        anyhow::bail!("Goal cannot be empty");
    }
    let format = cli.format.unwrap_or(config.report.format);
    let separator = config.report.separator.as_str();

    match cli.command {
        Command::Diagnose { strategy, symptoms } => {
            let strategy = strategy.unwrap_or(config.agent.strategy);
            let mut reporter = build_reporter(format, separator);
            let diagnosis = DiagnosticAgent::new(&kb, strategy)
                .with_goal(goal)
                .diagnose(symptoms.as_slice(), reporter.as_mut());
            if !diagnosis.is_positive() {
                std::process::exit(1);
            }
        }
        Command::Search { strategy, from, to } => {
            let strategy = strategy.unwrap_or(config.agent.strategy);
            let target = to.unwrap_or(goal);
            let outcome = strategy.search(&kb, &from, &target);
            match format {
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
                ReportFormat::Text => {
                    println!("{} search: '{}' to '{}'", strategy, from, target);
                    println!("Found: {}", if outcome.found { "yes" } else { "no" });
                    println!("Traversal order: {}", format_trace(&outcome.order, separator));
                    if outcome.found {
                        println!("Path: {}", format_trace(&outcome.path, separator));
                    }
                }
            }
        }
        Command::Demo => run_demo(&kb, &goal, format, separator),
        Command::Nodes => match format {
            ReportFormat::Json => {
                let sorted: BTreeMap<&str, &[String]> = kb.iter().collect();
                println!("{}", serde_json::to_string_pretty(&sorted)?);
            }
            ReportFormat::Text => {
                for (node, successors) in kb.iter() {
                    if successors.is_empty() {
                        println!("{}", node);
                    } else {
                        println!("{} -> {}", node, successors.join(", "));
                    }
                }
            }
        },
    }

    Ok(())
}

fn build_reporter(format: ReportFormat, separator: &str) -> Box<dyn Reporter> {
    match format {
        ReportFormat::Text => Box::new(ConsoleReporter::stdout().with_separator(separator)),
        ReportFormat::Json => Box::new(JsonReporter::stdout()),
    }
}

/// Demonstration patients: pallor and nosebleed with BFS, pallor and brittle
/// nails with DFS.
fn run_demo(kb: &KnowledgeBase, goal: &str, format: ReportFormat, separator: &str) {
    let cases: [(Strategy, &[&str]); 4] = [
        (Strategy::Bfs, &["Palidez"]),
        (Strategy::Bfs, &["Sangrado nasal"]),
        (Strategy::Dfs, &["Palidez"]),
        (Strategy::Dfs, &["Unas quebradizas"]),
    ];

    let mut reporter = build_reporter(format, separator);
    for (strategy, symptoms) in cases {
        DiagnosticAgent::new(kb, strategy)
            .with_goal(goal)
            .diagnose(symptoms, reporter.as_mut());
    }
}
