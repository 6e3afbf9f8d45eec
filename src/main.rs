use std::process::ExitCode;

use clap::Parser;
use csp_test_site::config::{self, Config};
use csp_test_site::error::StartupError;
use csp_test_site::fixture::RouteTable;
use csp_test_site::{logger, server, FixtureServer};

/// Static CSP test-fixture server
#[derive(Debug, Parser)]
#[command(
    name = "csp-test-site",
    version,
    after_help = "Environment:\n  PORT  Port to listen on (default: 3000)\n  HOST  Address to bind (default: localhost)"
)]
struct CliArgs {
    /// Config file name without extension
    #[arg(long = "config", value_name = "PATH", default_value = config::DEFAULT_CONFIG_PATH)]
    config_path: String,

    /// Print the fixture route table as TOML and exit
    #[arg(long)]
    print_routes: bool,
}

fn main() -> ExitCode {
    // Usage errors exit with status 2, help and version with 0
    let args = CliArgs::parse();

    let result = if args.print_routes {
        print_routes()
    } else {
        serve(&args.config_path)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_fatal(&e);
            ExitCode::FAILURE
        }
    }
}

fn print_routes() -> Result<(), StartupError> {
    let listing = RouteTable::builtin()?
        .to_toml()
        .map_err(|e| StartupError::Io(std::io::Error::other(e)))?;
    print!("{listing}");
    Ok(())
}

fn serve(config_path: &str) -> Result<(), StartupError> {
    let cfg = Config::load_from(config_path)?;
    logger::init(&cfg)?;

    // Create the Tokio runtime, honoring the configured worker count
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async {
        let fixture = FixtureServer::bind(&cfg)?;
        let state = fixture.state();
        logger::log_server_start(
            &fixture.local_addr()?,
            &cfg,
            &state.root_dir,
            state.routes.len(),
        );
        fixture.run(server::shutdown_signal()).await;
        Ok::<(), StartupError>(())
    })
}
