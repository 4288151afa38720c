use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use flow_status::prelude::*;
use flow_status::TraceOutcome;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flow-status")]
#[command(about = "Replay job exit-status propagation traces", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a trace file and print the final job execution
    Replay {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Override the policy named in the trace
        #[arg(short, long)]
        policy: Option<PolicyArg>,

        /// Print the outcome as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Classify exit codes as default or custom
    Classify {
        #[arg(value_name = "CODE", required = true)]
        codes: Vec<String>,
    },

    /// Check that a trace file parses
    Validate {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Standard,
    CustomPreserving,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Standard => PolicyKind::Standard,
            PolicyArg::CustomPreserving => PolicyKind::CustomPreserving,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "flow_status=debug"
    } else {
        "flow_status=info"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Commands::Replay { file, policy, json } => replay(file, policy, json),
        Commands::Classify { codes } => {
            classify_codes(&codes);
            Ok(true)
        }
        Commands::Validate { file } => validate(file),
    }
}

fn replay(file: PathBuf, policy: Option<PolicyArg>, json: bool) -> anyhow::Result<bool> {
    let mut trace = StatusTrace::load(&file)?;
    if let Some(policy) = policy {
        trace.executor.policy = policy.into();
    }

    tracing::info!(
        file = %file.display(),
        events = trace.events.len(),
        "Replaying trace"
    );

    let outcome = trace.replay()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }

    Ok(!outcome.execution.status().is_unsuccessful())
}

fn print_outcome(outcome: &TraceOutcome) {
    let execution = &outcome.execution;
    println!("Job:         {}", execution.job_name());
    println!("Execution:   {}", execution.id());
    println!("Policy:      {}", outcome.policy);
    println!("Run status:  {}", execution.status());
    println!("Exit code:   {}", execution.exit_status().exit_code());
    if !execution.exit_status().exit_description().is_empty() {
        println!("Description: {}", execution.exit_status().exit_description());
    }
    match &outcome.aggregate {
        Some(aggregate) => println!("Aggregate:   {}", aggregate.exit_code()),
        None => println!("Aggregate:   (none)"),
    }
}

fn classify_codes(codes: &[String]) {
    for code in codes {
        let label = match classify(Some(code.as_str())) {
            CodeClass::Default => "default",
            CodeClass::NonDefault => "custom",
        };
        println!("{code}\t{label}");
    }
}

fn validate(file: PathBuf) -> anyhow::Result<bool> {
    match StatusTrace::load(&file) {
        Ok(trace) => {
            println!(
                "✓ {} ({:?} policy, {} events)",
                file.display(),
                trace.executor.policy,
                trace.events.len()
            );
            Ok(true)
        }
        Err(e) => {
            println!("✗ {}: {}", file.display(), e);
            Ok(false)
        }
    }
}
