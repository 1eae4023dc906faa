use std::{io::Write, process::ExitCode};

use random::RandomSourceError;

mod random;
mod token;

fn setup_tracing() {
    // Standard output is reserved for the token
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[derive(thiserror::Error, Debug)]
enum Error {
    #[error("Error generating token: {0}")]
    Generate(#[from] RandomSourceError),
    #[error("Error writing token: {0}")]
    Write(#[from] std::io::Error),
}

/// Generates one token and writes it as a single line to `out`
fn run(
    generate: impl FnOnce() -> Result<String, RandomSourceError>,
    out: &mut impl Write,
) -> Result<(), Error> {
    let token = generate()?;
    writeln!(out, "{}", token)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    setup_tracing();

    match run(token::generate_token, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{}", error);
            ExitCode::FAILURE
        }
    }
}
