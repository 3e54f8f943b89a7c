use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, shells};
use cognitoctl_core::config::Config;
use tracing::{debug, error, info, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod confirm;
mod connection;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::operation::OperationRunner;
use connection::ConnectionManager;
use error::CognitoCtlError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level
    init_tracing(cli.verbose);

    // Load configuration from specified path or default location
    let (config, config_path) = if let Some(config_file) = &cli.config_file {
        let path = std::path::PathBuf::from(config_file);
        debug!("Loading config from explicit path: {:?}", path);
        let config = Config::load_from_path(&path)?;
        (config, Some(path))
    } else {
        debug!("Loading config from default location");
        (Config::load()?, None)
    };
    let mut conn_mgr = ConnectionManager::with_config_path(config, config_path);

    if let Err(e) = execute_command(cli, &mut conn_mgr).await {
        // Per-item failures have already been reported
        if !matches!(e, CognitoCtlError::ItemsFailed { .. }) {
            e.print_diagnostic(None);
        }
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    // Check for RUST_LOG env var first, then fall back to verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "cognitoctl=warn,cognitoctl_core=warn,aws_config=warn",
            1 => "cognitoctl=info,cognitoctl_core=info,aws_config=info",
            2 => "cognitoctl=debug,cognitoctl_core=debug,aws_config=debug",
            _ => "cognitoctl=trace,cognitoctl_core=trace,aws_config=debug,aws_smithy_runtime=debug",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .init();

    debug!("Tracing initialized with verbosity level: {}", verbose);
}

async fn execute_command(cli: Cli, conn_mgr: &mut ConnectionManager) -> Result<(), CognitoCtlError> {
    trace!("Executing command: {:?}", cli.command);
    info!("Command: {}", format_command(&cli.command));

    let start = std::time::Instant::now();
    let result = match cli.command {
        Commands::Version => {
            debug!("Showing version information");
            match cli.output {
                cli::OutputFormat::Json | cli::OutputFormat::Yaml => {
                    let output_data = serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "name": env!("CARGO_PKG_NAME"),
                    });
                    output::print_output(&output_data, cli.output.into(), None)?;
                }
                _ => {
                    println!("cognitoctl {}", env!("CARGO_PKG_VERSION"));
                }
            }
            Ok(())
        }
        Commands::Completions { shell } => {
            debug!("Generating completions for {:?}", shell);
            generate_completions(shell);
            Ok(())
        }

        Commands::Profile(ref profile_cmd) => {
            debug!("Executing profile command");
            commands::profile::handle_profile_command(
                profile_cmd,
                conn_mgr,
                cli.connection.settings(),
                cli.output,
            )
        }

        Commands::Catalog { ref filter } => {
            commands::catalog::handle_catalog(filter.as_deref(), cli.output, cli.query.as_deref())
        }

        Commands::Cognito(cmd) => {
            let descriptor = cmd.descriptor();
            debug!(
                operation = descriptor.operation,
                mutating = descriptor.requires_confirmation(),
                "Dispatching Cognito command"
            );
            let runner = OperationRunner {
                conn_mgr,
                profile: cli.profile.as_deref(),
                connection: cli.connection.settings(),
                switches: cli.switches.switches(),
                error_action: cli.switches.error_action,
                output: cli.output.into(),
                query: cli.query.as_deref(),
            };
            cmd.run(&runner).await
        }
    };

    let duration = start.elapsed();
    match &result {
        Ok(_) => info!("Command completed successfully in {:?}", duration),
        Err(e) => error!("Command failed after {:?}: {}", duration, e),
    }

    result
}

/// Generate shell completions
fn generate_completions(shell: cli::Shell) {
    let mut cmd = cli::Cli::command();
    let name = cmd.get_name().to_string();

    match shell {
        cli::Shell::Bash => generate(shells::Bash, &mut cmd, name, &mut std::io::stdout()),
        cli::Shell::Zsh => generate(shells::Zsh, &mut cmd, name, &mut std::io::stdout()),
        cli::Shell::Fish => generate(shells::Fish, &mut cmd, name, &mut std::io::stdout()),
        cli::Shell::PowerShell => {
            generate(shells::PowerShell, &mut cmd, name, &mut std::io::stdout())
        }
        cli::Shell::Elvish => generate(shells::Elvish, &mut cmd, name, &mut std::io::stdout()),
    }
}

/// Format command for human-readable logging (without sensitive data)
fn format_command(command: &Commands) -> String {
    match command {
        Commands::Version => "version".to_string(),
        Commands::Completions { shell } => format!("completions {:?}", shell),
        Commands::Catalog { filter } => match filter {
            Some(filter) => format!("commands {}", filter),
            None => "commands".to_string(),
        },
        Commands::Profile(cmd) => {
            use cli::ProfileCommands::*;
            match cmd {
                List => "profile list".to_string(),
                Path => "profile path".to_string(),
                Show { name } => format!("profile show {}", name),
                Set { name, .. } => format!("profile set {} [credentials redacted]", name),
                Remove { name } => format!("profile remove {}", name),
                Default { name } => format!("profile default {}", name),
                Validate => "profile validate".to_string(),
            }
        }
        Commands::Cognito(cmd) => {
            let descriptor = cmd.descriptor();
            format!("{} ({})", descriptor.command_name(), descriptor.operation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cognitoctl_core::operations::descriptors;

    #[test]
    fn every_operation_has_a_command_and_alias() {
        let cmd = Cli::command();
        for descriptor in descriptors() {
            let name = descriptor.command_name();
            assert!(
                cmd.find_subcommand(&name).is_some(),
                "missing command {name}"
            );
            let alias = descriptor.operation_alias();
            assert!(
                cmd.find_subcommand(&alias).is_some(),
                "missing alias {alias} for {name}"
            );
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn format_command_names_the_operation() {
        let cli = Cli::try_parse_from([
            "cognitoctl",
            "remove-admin-device",
            "--user-pool-id",
            "us-east-1_ABC123",
            "--username",
            "alice",
            "--device-key",
            "us-east-1_dev",
        ])
        .unwrap();
        assert_eq!(
            format_command(&cli.command),
            "remove-admin-device (AdminForgetDevice)"
        );
    }

    #[test]
    fn access_key_requires_secret_key() {
        let err = Cli::try_parse_from([
            "cognitoctl",
            "get-user-pool-list",
            "--access-key",
            "AKID",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn profile_set_redacts_credentials_in_logs() {
        let cli = Cli::try_parse_from([
            "cognitoctl",
            "profile",
            "set",
            "ci",
            "--access-key",
            "AKID",
            "--secret-key",
            "shh",
        ])
        .unwrap();
        let formatted = format_command(&cli.command);
        assert!(!formatted.contains("shh"));
        assert!(formatted.contains("redacted"));
    }
}
