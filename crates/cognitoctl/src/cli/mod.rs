//! CLI structure and command definitions
//!
//! One subcommand per wrapped Cognito operation (see [`cognito`]), plus the
//! auxiliary `commands`, `profile`, `completions` and `version` commands.

use clap::{Args, Parser, Subcommand};
use cognitoctl_core::{ConnectionSettings, Selector, Switches};

pub mod cognito;

pub use cognito::CognitoCommands;

/// Amazon Cognito user pool administration from the command line
#[derive(Parser, Debug)]
#[command(name = "cognitoctl")]
#[command(version, about = "Command-line wrappers for Amazon Cognito user pool operations")]
#[command(long_about = "
Command-line wrappers for Amazon Cognito user pool operations

Every command maps to exactly one Cognito Identity Provider API operation,
named verb-noun with the API name as an alias:
    cognitoctl get-group --user-pool-id us-east-1_ABC123 --group-name Admins
    cognitoctl remove-admin-device ...       # same as admin-forget-device

Region and credentials come from the AWS default chain unless overridden by a
cognitoctl profile or the --region/--aws-profile/--access-key flags.

EXAMPLES:
    # List the groups of a pool
    cognitoctl get-group-list --user-pool-id us-east-1_ABC123

    # Disable several users, reading user names from stdin
    cat users.txt | cognitoctl disable-admin-user --user-pool-id us-east-1_ABC123 --username - --force

    # Delete a group and print its name for chaining
    cognitoctl remove-group --user-pool-id us-east-1_ABC123 --group-name Old --force --pass-thru

    # Show what would be sent without sending it
    cognitoctl stop-user-import-job --user-pool-id us-east-1_ABC123 --job-id import-abc --dry-run

    # Filter output with JMESPath
    cognitoctl get-user-list --user-pool-id us-east-1_ABC123 -q '[?Enabled].Username'

For more help on a specific command, run:
    cognitoctl <command> --help
")]
pub struct Cli {
    /// cognitoctl profile to use for this command
    #[arg(long, short, global = true, env = "COGNITOCTL_PROFILE")]
    pub profile: Option<String>,

    /// Path to alternate configuration file
    #[arg(long, global = true, env = "COGNITOCTL_CONFIG_FILE")]
    pub config_file: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "auto")]
    pub output: OutputFormat,

    /// JMESPath query to filter output
    #[arg(long, short = 'q', global = true)]
    pub query: Option<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(flatten)]
    pub switches: SwitchArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// AWS connection overrides
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// AWS region, e.g. us-east-1
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long, global = true)]
    pub aws_profile: Option<String>,

    /// Endpoint override, e.g. a local Cognito emulator
    #[arg(long, global = true)]
    pub endpoint_url: Option<String>,

    /// AWS access key ID
    #[arg(long, global = true, requires = "secret_key")]
    pub access_key: Option<String>,

    /// AWS secret access key
    #[arg(long, global = true, requires = "access_key")]
    pub secret_key: Option<String>,

    /// AWS session token for temporary credentials
    #[arg(long, global = true)]
    pub session_token: Option<String>,
}

impl ConnectionArgs {
    pub fn settings(&self) -> ConnectionSettings {
        ConnectionSettings {
            region: self.region.clone(),
            aws_profile: self.aws_profile.clone(),
            endpoint_url: self.endpoint_url.clone(),
            access_key_id: self.access_key.clone(),
            secret_access_key: self.secret_key.clone(),
            session_token: self.session_token.clone(),
        }
    }
}

/// Switches shared by every Cognito command
#[derive(Args, Debug, Clone, Default)]
pub struct SwitchArgs {
    /// Skip the confirmation prompt for mutating commands
    #[arg(long, short = 'f', global = true)]
    pub force: bool,

    /// Emit the input identifier for commands that return nothing
    #[arg(long, global = true)]
    pub pass_thru: bool,

    /// Show what would be sent without calling the service
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Override what is emitted: '*' for the whole response, '^Param' for a
    /// request parameter, or a response member name
    #[arg(long, global = true, value_parser = parse_selector)]
    pub select: Option<Selector>,

    /// What to do when a pipeline item fails
    #[arg(long, global = true, value_enum, default_value = "continue")]
    pub error_action: ErrorAction,
}

impl SwitchArgs {
    pub fn switches(&self) -> Switches {
        Switches {
            force: self.force,
            pass_thru: self.pass_thru,
            dry_run: self.dry_run,
            select: self.select.clone(),
        }
    }
}

fn parse_selector(s: &str) -> Result<Selector, String> {
    s.parse()
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON unless another format is requested
    Auto,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Human-readable table format
    Table,
}

/// Behaviour after a failed pipeline item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ErrorAction {
    /// Report the error and go on with the next item
    #[default]
    Continue,
    /// Report the error and stop
    Stop,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum Commands {
    #[command(flatten)]
    Cognito(CognitoCommands),

    /// List the available Cognito commands
    #[command(name = "commands", visible_alias = "ls")]
    Catalog {
        /// Only show commands whose name or operation contains this text
        filter: Option<String>,
    },

    /// Profile management
    #[command(subcommand, visible_alias = "prof", visible_alias = "pr")]
    #[command(after_help = "EXAMPLES:
    # Profile for a production pool using an AWS named profile
    cognitoctl profile set prod --region eu-west-1 --aws-profile admin --default

    # Profile for a local emulator
    cognitoctl profile set local --region us-east-1 --endpoint-url http://localhost:9229 \\
        --access-key local --secret-key local

    # List all profiles
    cognitoctl profile list

    # Validate configuration
    cognitoctl profile validate
")]
    Profile(ProfileCommands),

    /// Version information
    #[command(visible_alias = "ver", visible_alias = "v")]
    Version,

    /// Generate shell completions
    #[command(visible_alias = "comp")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bourne Again Shell
    Bash,
    /// Z Shell
    Zsh,
    /// Friendly Interactive Shell
    Fish,
    /// PowerShell
    #[value(name = "powershell", alias = "power-shell")]
    PowerShell,
    /// Elvish
    Elvish,
}

/// Profile management commands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List all configured profiles
    #[command(visible_alias = "ls", visible_alias = "l")]
    List,

    /// Show the path to the configuration file
    Path,

    /// Show details of a specific profile
    #[command(visible_alias = "sh", visible_alias = "get")]
    Show {
        /// Profile name to show
        name: String,
    },

    /// Set or update a profile
    ///
    /// Connection values come from the global flags (--region, --aws-profile,
    /// --endpoint-url, --access-key, --secret-key, --session-token). Values
    /// not given keep their current setting when the profile exists.
    #[command(visible_alias = "add", visible_alias = "create")]
    Set {
        /// Profile name
        name: String,

        /// Make this the default profile
        #[arg(long)]
        default: bool,
    },

    /// Remove a profile
    #[command(visible_alias = "rm", visible_alias = "del", visible_alias = "delete")]
    Remove {
        /// Profile name to remove
        name: String,
    },

    /// Set the default profile
    #[command(name = "default", visible_alias = "def")]
    Default {
        /// Profile name to use by default
        name: String,
    },

    /// Validate configuration file and profiles
    #[command(visible_alias = "check")]
    Validate,
}
