use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "backlog")]
#[command(about = "Command line interface for the Backlog API")]
#[command(version)]
#[command(after_help = "Examples:
  backlog config set --url https://example.backlog.com
  backlog project list                       # Projects you have joined
  backlog project show TEST                  # One project by key or id
  backlog wiki list TEST --keyword meeting   # Search wiki pages
  backlog activity --project TEST --count 20 # Recent project activity
  backlog user me --format json              # Your own user as JSON

Environment Variables:
  BACKLOG_API_KEY   Backlog API key (required)
  BACKLOG_URL       Backlog space URL")]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Backlog space URL (overrides config file and BACKLOG_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Backlog API key
    #[arg(long, global = true, env = "BACKLOG_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configuration management (show, set, validate)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Browse projects
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Browse wiki pages
    Wiki {
        #[command(subcommand)]
        command: WikiCommands,
    },
    /// Browse space users
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// List recent activity of the space, a project or a user
    Activity(ActivityArgs),
    /// Upload and list attachments
    Attachment {
        #[command(subcommand)]
        command: AttachmentCommands,
    },
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Save the global --url and/or a timeout to the config file
    #[command(after_help = "Examples:
  backlog config set --url https://example.backlog.com
  backlog config set --timeout 60")]
    Set {
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Validate the API key by fetching your own user
    Validate,
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List projects
    List {
        /// Include every project in the space (administrators only)
        #[arg(long)]
        all: bool,
        /// Only archived (true) or only active (false) projects
        #[arg(long)]
        archived: Option<bool>,
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Show one project
    Show {
        /// Project id or key
        project: String,
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

#[derive(Subcommand, Debug)]
pub enum WikiCommands {
    /// List wiki pages of a project
    List {
        /// Project id or key
        project: String,
        /// Only pages matching this keyword
        #[arg(long)]
        keyword: Option<String>,
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Count wiki pages of a project
    Count {
        /// Project id or key
        project: String,
    },
    /// Show one wiki page
    Show {
        id: i64,
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List users of the space
    List {
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Show the user the API key belongs to
    Me {
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Args, Debug)]
#[command(after_help = "Examples:
  backlog activity                          # Space activity
  backlog activity --project TEST           # Project activity
  backlog activity --user 12 --type 1 --type 2
  backlog activity --count 100 --order asc")]
pub struct ActivityArgs {
    /// Project id or key
    #[arg(long, conflicts_with = "user")]
    pub project: Option<String>,

    /// User id
    #[arg(long)]
    pub user: Option<i64>,

    /// Activity type id (1-26), repeatable
    #[arg(long = "type", action = clap::ArgAction::Append)]
    pub type_ids: Vec<i64>,

    #[arg(long)]
    pub min_id: Option<i64>,

    #[arg(long)]
    pub max_id: Option<i64>,

    /// Number of activities (1-100)
    #[arg(long)]
    pub count: Option<i64>,

    #[arg(long, value_enum)]
    pub order: Option<SortOrder>,

    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum AttachmentCommands {
    /// Upload a file to the space attachment area
    Upload {
        file: PathBuf,
        /// Name to store the file under (defaults to the file name)
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// List attachments of a wiki page
    List {
        /// Wiki page id
        #[arg(long)]
        wiki: i64,
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}
