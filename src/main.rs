//! Ghostpass - A privacy-first secrets manager.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ghostpass::cli::{banner, execute, output, Cli};
use ghostpass::core::constants::LOG_ENV;
use ghostpass::core::guard::Guard;
use ghostpass::core::workspace::Workspace;
use ghostpass::error::{CodecError, ConfigError, CryptoError, Error, Result, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ghostpass=debug")
        } else {
            EnvFilter::new("ghostpass=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    output::init();
    if banner::should_print(cli.no_banner) {
        banner::print_banner();
    }

    // Owned here so every store opened below is purged on Ctrl-C.
    let guard = Guard::new();

    if let Err(e) = run(cli, &guard) {
        output::error(&e.to_string());
        if let Some(hint) = hint(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, guard: &Guard) -> Result<()> {
    guard.install()?;
    let workspace = Workspace::resolve()?.with_guard(guard.clone());
    execute(cli.command, &workspace)
}

fn hint(e: &Error) -> Option<&'static str> {
    match e {
        Error::Store(StoreError::NameRequired) => Some("pass the store name with --name"),
        Error::Store(StoreError::StoreNotFound(_)) => Some("run: ghostpass stores"),
        Error::Store(StoreError::AlreadyExists(_)) => {
            Some("pick another name, or run: ghostpass destruct --name <name>")
        }
        Error::Store(StoreError::AlreadyOpen { holder: Some(_), .. }) => {
            Some("another running ghostpass process has this store open; retry when it exits")
        }
        Error::Crypto(CryptoError::AuthenticationFailure) => {
            Some("check the master key; the store file was not modified")
        }
        Error::Codec(CodecError::CapacityExceeded { .. }) => {
            Some("use a longer corpus with more words")
        }
        Error::Config(ConfigError::NoHomeDirectory) => Some("set GHOSTPASS_HOME"),
        _ => None,
    }
}
