//! Interactive confirmation for mutating commands

use std::io::IsTerminal;

use cognitoctl_core::invoke::ConfirmationGate;
use dialoguer::Confirm;

/// Prompts on the terminal; declines when stdin is not interactive
pub struct TerminalConfirm;

impl ConfirmationGate for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> std::io::Result<bool> {
        if !std::io::stdin().is_terminal() {
            eprintln!("Warning: {} Use --force to skip confirmation.", prompt);
            return Ok(false);
        }

        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(std::io::Error::other)
    }
}
