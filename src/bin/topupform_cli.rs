//! TopUpForm CLI - Bridge interface for the web form
//!
//! Commands: rules, validate
//! Outputs JSON to stdout
//! Returns non-zero on validation failure

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use topupform_core::{rule_table, TopUpRequest, Validator, ENGINE_VERSION};

#[derive(Parser)]
#[command(name = "topupform-cli")]
#[command(about = "TopUpForm CLI - Order Form Rule Engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the rule table in evaluation order
    Rules,

    /// Validate a submitted order
    Validate {
        /// JSON payload (TopUpRequest)
        #[arg(short, long)]
        payload: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rules => {
            let output = serde_json::json!({
                "engine": ENGINE_VERSION,
                "rules": rule_table(),
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
            ExitCode::SUCCESS
        }

        Commands::Validate { payload } => {
            let order = match TopUpRequest::from_json(&payload) {
                Ok(o) => o,
                Err(e) => {
                    println!(r#"{{"valid": false, "error": "{}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let result = Validator::new().validate(&order);
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
            if result.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)  // Rule violations
            }
        }
    }
}
