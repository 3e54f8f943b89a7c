//! Shared driver for every Cognito command
//!
//! Expands pipeline input, connects through the cached client, runs each item
//! through the core [`Invoker`] and writes what it emits.

use cognitoctl_core::pipeline;
use cognitoctl_core::{
    CommandDescriptor, ConnectionSettings, InvocationContext, Invoker, Operation, Outcome,
    Switches,
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::cli::ErrorAction;
use crate::confirm::TerminalConfirm;
use crate::connection::ConnectionManager;
use crate::error::{CognitoCtlError, Result as CliResult};
use crate::output::{self, OutputFormat};

/// Everything a command needs besides its request
pub struct OperationRunner<'a> {
    pub conn_mgr: &'a ConnectionManager,
    pub profile: Option<&'a str>,
    pub connection: ConnectionSettings,
    pub switches: Switches,
    pub error_action: ErrorAction,
    pub output: OutputFormat,
    pub query: Option<&'a str>,
}

impl OperationRunner<'_> {
    fn emit(&self, outcome: Outcome) -> CliResult<()> {
        match outcome {
            Outcome::Emitted(value) => output::print_output(&value, self.output, self.query)?,
            Outcome::Completed | Outcome::Declined => {}
            Outcome::DryRun {
                command,
                operation,
                target,
                payload,
            } => eprintln!("{}", dry_run_text(&command, operation, &target, &payload)),
        }
        Ok(())
    }
}

/// Run `request`, once per pipeline item when its pipeline parameter is `-`.
pub async fn run_operation<O: Operation>(runner: &OperationRunner<'_>, request: O) -> CliResult<()> {
    let descriptor = O::DESCRIPTOR;

    if runner.switches.pass_thru && descriptor.pass_thru.is_none() {
        warn!(
            command = %descriptor.command_name(),
            "--pass-thru has no effect on commands that return output"
        );
    }

    let items = if pipeline::reads_pipeline(&request) {
        pipeline::expand(request, std::io::stdin().lock())?
    } else {
        vec![Ok(request)]
    };
    if items.is_empty() {
        debug!(command = %descriptor.command_name(), "No pipeline input");
        return Ok(());
    }

    let settings = runner
        .conn_mgr
        .resolve_settings(runner.profile, runner.connection.clone())?;
    let (api, environment) = runner.conn_mgr.client(&settings).await?;
    let invoker = Invoker::new(&*api, &TerminalConfirm);

    let total = items.len();
    let mut failed = 0;
    for item in items {
        let (result, target) = match item {
            Ok(request) => {
                let context = InvocationContext::new(request, environment.clone());
                let target = context
                    .payload()
                    .ok()
                    .map(|payload| context.resource_text(&payload));
                let result = invoker
                    .invoke(&context, &runner.switches)
                    .await
                    .map_err(CognitoCtlError::from)
                    .and_then(|outcome| runner.emit(outcome));
                (result, target)
            }
            Err(err) => (Err(err.into()), None),
        };

        if let Err(err) = result {
            failed += 1;
            err.print_diagnostic(Some(&failure_context(&descriptor, target.as_deref())));
            if runner.error_action == ErrorAction::Stop {
                break;
            }
        }
    }

    if failed > 0 {
        return Err(CognitoCtlError::ItemsFailed { failed, total });
    }
    Ok(())
}

fn failure_context(descriptor: &CommandDescriptor, target: Option<&str>) -> String {
    match target {
        Some(target) => format!(
            "while running {} ({}) on '{}'",
            descriptor.command_name(),
            descriptor.operation,
            target
        ),
        None => format!(
            "while running {} ({})",
            descriptor.command_name(),
            descriptor.operation
        ),
    }
}

fn dry_run_text(command: &str, operation: &str, target: &str, payload: &Value) -> String {
    let body = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
    format!(
        "What if: Performing the operation \"{} ({})\" on target \"{}\".\n{}",
        command, operation, target, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cognitoctl_core::operations::DeleteGroupRequest;
    use serde_json::json;

    #[test]
    fn test_dry_run_text() {
        let text = dry_run_text(
            "remove-group",
            "DeleteGroup",
            "Admins",
            &json!({"GroupName": "Admins"}),
        );
        assert!(text.starts_with(
            "What if: Performing the operation \"remove-group (DeleteGroup)\" on target \"Admins\"."
        ));
        assert!(text.ends_with("{\n  \"GroupName\": \"Admins\"\n}"));
    }

    #[test]
    fn test_failure_context() {
        let descriptor = DeleteGroupRequest::DESCRIPTOR;
        assert_eq!(
            failure_context(&descriptor, Some("Admins")),
            "while running remove-group (DeleteGroup) on 'Admins'"
        );
        assert_eq!(
            failure_context(&descriptor, None),
            "while running remove-group (DeleteGroup)"
        );
    }
}
