//! Profile management command implementations

use colored::Colorize;
use cognitoctl_core::ConnectionSettings;
use cognitoctl_core::config::{Config, Profile};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{OutputFormat, ProfileCommands};
use crate::connection::ConnectionManager;
use crate::error::{CognitoCtlError, Result as CliResult};
use crate::output;

/// Handle profile management commands
pub fn handle_profile_command(
    profile_cmd: &ProfileCommands,
    conn_mgr: &mut ConnectionManager,
    connection: ConnectionSettings,
    output_format: OutputFormat,
) -> CliResult<()> {
    use ProfileCommands::*;

    match profile_cmd {
        List => handle_list(conn_mgr, output_format),
        Path => handle_path(conn_mgr, output_format),
        Show { name } => handle_show(conn_mgr, name, output_format),
        Set { name, default } => handle_set(conn_mgr, name, connection, *default),
        Remove { name } => handle_remove(conn_mgr, name),
        Default { name } => handle_default(conn_mgr, name),
        Validate => handle_validate(conn_mgr, output_format),
    }
}

/// A profile as shown to the user, secrets reduced to a flag
#[derive(Debug, Serialize)]
struct ProfileView<'a> {
    name: &'a str,
    is_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aws_profile: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_key_preview: Option<String>,
    secret_configured: bool,
    session_token_configured: bool,
}

impl<'a> ProfileView<'a> {
    fn new(config: &Config, name: &'a str, profile: &'a Profile) -> Self {
        Self {
            name,
            is_default: config.default_profile.as_deref() == Some(name),
            region: profile.region.as_deref(),
            aws_profile: profile.aws_profile.as_deref(),
            endpoint_url: profile.endpoint_url.as_deref(),
            access_key_preview: profile
                .access_key_id
                .as_deref()
                .map(|key| format!("{}...", key.chars().take(8).collect::<String>())),
            secret_configured: profile.secret_access_key.is_some(),
            session_token_configured: profile.session_token.is_some(),
        }
    }

    fn print_human(&self) {
        if self.is_default {
            println!("{} {}", self.name.bold().cyan(), "(default)".green());
        } else {
            println!("{}", self.name.bold().cyan());
        }
        if let Some(region) = self.region {
            println!("    {} {}", "Region:".dimmed(), region);
        }
        if let Some(aws_profile) = self.aws_profile {
            println!("    {} {}", "AWS profile:".dimmed(), aws_profile);
        }
        if let Some(endpoint) = self.endpoint_url {
            println!("    {} {}", "Endpoint:".dimmed(), endpoint);
        }
        if let Some(key) = &self.access_key_preview {
            println!(
                "    {} {}{}",
                "Access key:".dimmed(),
                key,
                if self.session_token_configured {
                    " (with session token)"
                } else {
                    ""
                }
            );
        }
    }
}

fn config_path_display(conn_mgr: &ConnectionManager) -> Option<String> {
    conn_mgr
        .config_path
        .clone()
        .or_else(|| Config::config_path().ok())
        .map(|p| p.display().to_string())
}

fn handle_list(conn_mgr: &ConnectionManager, output_format: OutputFormat) -> CliResult<()> {
    debug!("Listing all configured profiles");
    let views: Vec<_> = conn_mgr
        .config
        .list_profiles()
        .into_iter()
        .map(|(name, profile)| ProfileView::new(&conn_mgr.config, name, profile))
        .collect();

    match output_format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let output_data = serde_json::json!({
                "config_path": config_path_display(conn_mgr),
                "profiles": views,
                "count": views.len(),
            });
            output::print_output(&output_data, output_format.into(), None)?;
        }
        _ => {
            if let Some(path) = config_path_display(conn_mgr) {
                println!("Configuration file: {}", path);
                println!();
            }

            if views.is_empty() {
                info!("No profiles configured");
                println!("No profiles configured.");
                println!("Use 'cognitoctl profile set <name> --region <region>' to create a profile.");
                return Ok(());
            }

            for view in &views {
                view.print_human();
            }
        }
    }

    Ok(())
}

fn handle_path(conn_mgr: &ConnectionManager, output_format: OutputFormat) -> CliResult<()> {
    let config_path = match &conn_mgr.config_path {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };

    match output_format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let output_data = serde_json::json!({
                "config_path": config_path.to_str()
            });
            output::print_output(&output_data, output_format.into(), None)?;
        }
        _ => println!("{}", config_path.display()),
    }
    Ok(())
}

fn handle_show(
    conn_mgr: &ConnectionManager,
    name: &str,
    output_format: OutputFormat,
) -> CliResult<()> {
    let profile = conn_mgr
        .config
        .profiles
        .get(name)
        .ok_or_else(|| CognitoCtlError::ProfileNotFound { name: name.into() })?;
    let view = ProfileView::new(&conn_mgr.config, name, profile);

    match output_format {
        OutputFormat::Json | OutputFormat::Yaml => {
            output::print_output(&view, output_format.into(), None)?;
        }
        _ => view.print_human(),
    }
    Ok(())
}

/// Overlay the given connection values on `existing`.
fn merge_profile(existing: Option<&Profile>, values: ConnectionSettings) -> Profile {
    let base = existing.cloned().unwrap_or_default();
    Profile {
        region: values.region.or(base.region),
        aws_profile: values.aws_profile.or(base.aws_profile),
        endpoint_url: values.endpoint_url.or(base.endpoint_url),
        access_key_id: values.access_key_id.or(base.access_key_id),
        secret_access_key: values.secret_access_key.or(base.secret_access_key),
        session_token: values.session_token.or(base.session_token),
    }
}

fn handle_set(
    conn_mgr: &mut ConnectionManager,
    name: &str,
    values: ConnectionSettings,
    make_default: bool,
) -> CliResult<()> {
    debug!("Setting profile: {}", name);

    let config = &mut conn_mgr.config;
    let existed = config.profiles.contains_key(name);
    let profile = merge_profile(config.profiles.get(name), values);

    let problems = profile.validate();
    if !problems.is_empty() {
        return Err(CognitoCtlError::InvalidInput {
            message: problems.join("; "),
        });
    }

    config.set_profile(name.to_string(), profile);
    if make_default || config.profiles.len() == 1 {
        config.default_profile = Some(name.to_string());
    }
    let is_default = config.default_profile.as_deref() == Some(name);

    conn_mgr.save_config()?;

    if existed {
        println!("Profile '{}' updated successfully.", name);
    } else {
        println!("Profile '{}' created successfully.", name);
    }
    if is_default {
        println!("Set as default profile.");
    }
    Ok(())
}

fn handle_remove(conn_mgr: &mut ConnectionManager, name: &str) -> CliResult<()> {
    debug!("Removing profile: {}", name);

    let was_default = conn_mgr.config.default_profile.as_deref() == Some(name);
    if conn_mgr.config.remove_profile(name).is_none() {
        return Err(CognitoCtlError::ProfileNotFound { name: name.into() });
    }

    conn_mgr.save_config()?;

    println!("Profile '{}' removed successfully.", name);
    if was_default {
        println!("Default profile cleared.");
    }
    Ok(())
}

fn handle_default(conn_mgr: &mut ConnectionManager, name: &str) -> CliResult<()> {
    debug!("Setting default profile: {}", name);

    if !conn_mgr.config.profiles.contains_key(name) {
        return Err(CognitoCtlError::ProfileNotFound { name: name.into() });
    }

    conn_mgr.config.default_profile = Some(name.to_string());
    conn_mgr.save_config()?;

    println!("Default profile set to '{}'.", name);
    Ok(())
}

#[derive(Debug, Serialize)]
struct ProfileValidation {
    name: String,
    valid: bool,
    problems: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ValidationOutput {
    config_path: Option<String>,
    config_exists: bool,
    profiles: Vec<ProfileValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_profile: Option<String>,
    default_profile_valid: bool,
    overall_valid: bool,
}

fn validate_config(config: &Config, config_path: Option<String>, config_exists: bool) -> ValidationOutput {
    let profiles: Vec<_> = config
        .list_profiles()
        .into_iter()
        .map(|(name, profile)| {
            let problems = profile.validate();
            ProfileValidation {
                name: name.clone(),
                valid: problems.is_empty(),
                problems,
            }
        })
        .collect();

    let default_profile_valid = config
        .default_profile
        .as_ref()
        .is_none_or(|name| config.profiles.contains_key(name));
    let overall_valid = profiles.iter().all(|p| p.valid) && default_profile_valid;

    ValidationOutput {
        config_path,
        config_exists,
        profiles,
        default_profile: config.default_profile.clone(),
        default_profile_valid,
        overall_valid,
    }
}

fn handle_validate(conn_mgr: &ConnectionManager, output_format: OutputFormat) -> CliResult<()> {
    let config_path = config_path_display(conn_mgr);
    let config_exists = match &conn_mgr.config_path {
        Some(path) => path.exists(),
        None => Config::config_path().map(|p| p.exists()).unwrap_or(false),
    };
    let result = validate_config(&conn_mgr.config, config_path, config_exists);

    match output_format {
        OutputFormat::Json | OutputFormat::Yaml => {
            output::print_output(&result, output_format.into(), None)?;
        }
        _ => print_validation_human(&result),
    }

    if !result.overall_valid {
        return Err(CognitoCtlError::Configuration(
            "configuration has problems".to_string(),
        ));
    }
    Ok(())
}

fn print_validation_human(result: &ValidationOutput) {
    if let Some(path) = &result.config_path {
        println!("Configuration file: {}", path);
    }

    if !result.config_exists {
        println!("{} Configuration file does not exist", "!!".yellow());
        println!("  Region and credentials will come from the AWS default chain.");
        return;
    }

    println!("{} Configuration file exists and is readable", "ok".green());
    println!("{} Found {} profile(s)", "ok".green(), result.profiles.len());
    println!();

    for p in &result.profiles {
        if p.valid {
            println!("Profile '{}': {}", p.name, "ok".green());
        } else {
            println!("Profile '{}': {}", p.name, "x".red());
            for problem in &p.problems {
                println!("    {}", problem);
            }
        }
    }

    if let Some(default) = &result.default_profile {
        println!();
        if result.default_profile_valid {
            println!("{} Default profile: {}", "ok".green(), default);
        } else {
            println!("{} Default profile '{}' does not exist", "x".red(), default);
        }
    }

    println!();
    if result.overall_valid {
        println!("{} Configuration is valid", "ok".green());
    } else {
        println!("{} Configuration has problems", "x".red());
    }
}
