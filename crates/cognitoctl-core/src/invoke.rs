//! The shared invocation pipeline
//!
//! Every command runs through [`Invoker::invoke`]:
//!
//! 1. render the request payload (absent fields omitted),
//! 2. on `--dry-run`, report what would happen and stop,
//! 3. for mutating verbs without `--force`, ask the [`ConfirmationGate`];
//!    a decline ends the invocation silently,
//! 4. dispatch the one remote call,
//! 5. enrich name-resolution failures with a hint,
//! 6. project the response according to the descriptor and switches.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use tracing::{debug, info};

use crate::api::CognitoApi;
use crate::connect::Environment;
use crate::descriptor::{CommandDescriptor, Operation, OutputShape};
use crate::error::InvokeError;

/// Immutable per-invocation state
#[derive(Debug, Clone)]
pub struct InvocationContext<O> {
    request: O,
    environment: Environment,
}

impl<O: Operation> InvocationContext<O> {
    pub fn new(request: O, environment: Environment) -> Self {
        Self {
            request,
            environment,
        }
    }

    pub fn request(&self) -> &O {
        &self.request
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The request as it goes on the wire
    pub fn payload(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&self.request)
    }

    /// Human-readable target used in confirmation and dry-run text
    pub fn resource_text(&self, payload: &Value) -> String {
        match payload.get(O::DESCRIPTOR.resource_param) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "(unspecified)".to_string(),
        }
    }
}

/// Asks the user whether a mutating operation should proceed
pub trait ConfirmationGate: Send + Sync {
    fn confirm(&self, prompt: &str) -> std::io::Result<bool>;
}

/// Output override given with `--select`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `*`: the whole response
    Whole,
    /// `^Name`: the value of a request parameter
    Parameter(String),
    /// A response member, dotted paths allowed
    Field(String),
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("selector cannot be empty".to_string());
        }
        if s == "*" {
            return Ok(Selector::Whole);
        }
        if let Some(param) = s.strip_prefix('^') {
            if param.is_empty() {
                return Err("expected a parameter name after '^'".to_string());
            }
            return Ok(Selector::Parameter(param.to_string()));
        }
        Ok(Selector::Field(s.to_string()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Whole => f.write_str("*"),
            Selector::Parameter(p) => write!(f, "^{p}"),
            Selector::Field(name) => f.write_str(name),
        }
    }
}

/// Common switches accepted by every command
#[derive(Debug, Clone, Default)]
pub struct Switches {
    pub force: bool,
    pub pass_thru: bool,
    pub dry_run: bool,
    pub select: Option<Selector>,
}

/// How an invocation ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A value to write to output
    Emitted(Value),
    /// The call succeeded with nothing to emit
    Completed,
    /// The user declined the confirmation prompt
    Declined,
    /// `--dry-run`: nothing was sent
    DryRun {
        command: String,
        operation: &'static str,
        target: String,
        payload: Value,
    },
}

/// Runs single invocations against a client
pub struct Invoker<'a> {
    api: &'a dyn CognitoApi,
    gate: &'a dyn ConfirmationGate,
}

impl<'a> Invoker<'a> {
    pub fn new(api: &'a dyn CognitoApi, gate: &'a dyn ConfirmationGate) -> Self {
        Self { api, gate }
    }

    pub async fn invoke<O: Operation>(
        &self,
        context: &InvocationContext<O>,
        switches: &Switches,
    ) -> Result<Outcome, InvokeError> {
        let descriptor = O::DESCRIPTOR;
        let payload = context.payload()?;
        let target = context.resource_text(&payload);

        if switches.dry_run {
            info!(operation = descriptor.operation, %target, "Dry run, not sending request");
            return Ok(Outcome::DryRun {
                command: descriptor.command_name(),
                operation: descriptor.operation,
                target,
                payload,
            });
        }

        if descriptor.requires_confirmation() && !switches.force {
            let prompt = confirmation_prompt(&descriptor, &target);
            if !self.gate.confirm(&prompt)? {
                debug!(operation = descriptor.operation, %target, "Confirmation declined");
                return Ok(Outcome::Declined);
            }
        }

        let environment = context.environment();
        debug!(
            operation = descriptor.operation,
            region = %environment.region,
            endpoint = %environment.endpoint(),
            "Invoking"
        );

        let response = context
            .request()
            .dispatch(self.api)
            .await
            .map_err(|err| InvokeError::from_api(err, environment))?;
        let response = serde_json::to_value(&response)?;

        Ok(match project(&descriptor, &payload, &response, switches) {
            Some(value) => Outcome::Emitted(value),
            None => Outcome::Completed,
        })
    }
}

/// Confirmation text for a mutating operation
pub fn confirmation_prompt(descriptor: &CommandDescriptor, target: &str) -> String {
    format!(
        "Performing the operation \"{} ({})\" on target \"{}\". Continue?",
        descriptor.command_name(),
        descriptor.operation,
        target
    )
}

/// Pick what to emit from a response.
///
/// `request` is the rendered request payload, used for `--pass-thru` and
/// `^Param` selection. Returns `None` when there is nothing to emit.
pub fn project(
    descriptor: &CommandDescriptor,
    request: &Value,
    response: &Value,
    switches: &Switches,
) -> Option<Value> {
    match &switches.select {
        Some(Selector::Whole) => return Some(response.clone()),
        Some(Selector::Parameter(name)) => return lookup(request, name),
        Some(Selector::Field(path)) => return lookup(response, path),
        None => {}
    }

    if switches.pass_thru
        && let Some(param) = descriptor.pass_thru
    {
        return lookup(request, param);
    }

    match descriptor.output {
        OutputShape::Field(name) => lookup(response, name),
        OutputShape::Whole => Some(response.clone()),
        OutputShape::Nothing => None,
    }
}

/// Follow a dotted path, matching member names exactly first and then
/// case-insensitively. Nulls count as absent.
fn lookup(value: &Value, path: &str) -> Option<Value> {
    let mut current = value;
    for segment in path.split('.') {
        let object = current.as_object()?;
        current = match object.get(segment) {
            Some(v) => v,
            None => object
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(segment))
                .map(|(_, v)| v)?,
        };
    }
    (!current.is_null()).then(|| current.clone())
}
