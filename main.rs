//! Khalti command-line client
//!
//! A thin front end over the library for checking payments from a shell.
//! Configuration comes from the `KHALTI_*` environment variables.

use rust_khalti::cli::{Command, USAGE};
use rust_khalti::{Khalti, Result};
use serde_json::Value;
use std::env;

#[tokio::main]
async fn main() {
    // Initialize tracing on stderr; stdout carries only the JSON response
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    match run(&args).await {
        Ok(None) => println!("{}", USAGE),
        Ok(Some(response)) => match serde_json::to_string_pretty(&response) {
            Ok(pretty) => println!("{}", pretty),
            Err(_) => println!("{}", response),
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(body) = e.response_body() {
                eprintln!("Response: {}", body);
            }
            std::process::exit(1);
        }
    }
}

async fn run(args: &[String]) -> Result<Option<Value>> {
    let command = Command::parse(args)?;
    if command == Command::Help {
        return Ok(None);
    }

    let khalti = Khalti::from_env()?;
    command.execute(&khalti).await.map(Some)
}
