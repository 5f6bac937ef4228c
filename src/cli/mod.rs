//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};

pub mod account;
pub mod args;
pub mod auth;
pub mod chat;
pub mod config;
pub mod context;
pub mod cv;
pub mod messages;
pub mod peers;
pub mod profile;
pub mod search;
pub mod space;
pub mod status;

pub use args::OutputFormat;
pub use context::CommandContext;

/// Orientor CLI - Career guidance from the terminal
#[derive(Parser, Debug)]
#[command(name = "orientor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "ORIENTOR_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "ORIENTOR_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Orientor backend address
    #[arg(long, global = true, env = "ORIENTOR_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Resume editor address
    #[arg(long, global = true, env = "ORIENTOR_RESUME_URL", hide_env = true)]
    pub resume_url: Option<String>,

    /// Override session file location
    #[arg(long, global = true, env = "ORIENTOR_SESSION_FILE", hide_env = true)]
    pub session_file: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ORIENTOR_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store a session
    Login {
        /// Account email (prompted when omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password (prompted when omitted)
        #[arg(long, short = 'p', env = "ORIENTOR_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        /// Username (prompted when omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Account email (prompted when omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password (prompted when omitted)
        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show configuration and session status
    Status {
        /// Also verify the session against the backend
        #[arg(long)]
        check: bool,
    },

    /// Show the signed-in account
    Whoami,

    /// Display version information
    Version,

    /// Show or change CLI configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// View and edit your student profile
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Change account details
    #[command(subcommand)]
    Account(AccountCommands),

    /// Suggested peers with similar profiles
    Peers {
        /// Maximum number of peers (1-20)
        #[arg(
            long,
            short = 'n',
            default_value_t = 5,
            value_parser = clap::value_parser!(u32).range(1..=20)
        )]
        limit: u32,
    },

    /// List your conversations
    Messages,

    /// Chat with a peer or the mentor
    #[command(subcommand)]
    Chat(ChatCommands),

    /// Search career recommendations
    #[command(after_help = "EXAMPLES:\n  \
        orientor search \"working with animals outdoors\"\n  \
        orientor search nursing --top-k 10 --format json")]
    Search {
        /// What you are looking for
        query: String,

        /// Number of results
        #[arg(long, short = 'k', default_value_t = 5)]
        top_k: u32,
    },

    /// Saved recommendations, notes and skills
    #[command(subcommand)]
    Space(SpaceCommands),

    /// Resume builder
    #[command(subcommand)]
    Cv(CvCommands),
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print resolved configuration values
    Show,

    /// Persist the backend address
    SetUrl {
        /// Base address, e.g. https://api.orientor.example
        url: String,
    },
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show your profile
    Show,

    /// Update profile fields
    Update(ProfileUpdateArgs),
}

/// Editable profile fields
#[derive(Debug, Clone, Args, Default)]
pub struct ProfileUpdateArgs {
    #[arg(long)]
    pub favorite_movie: Option<String>,

    #[arg(long)]
    pub favorite_book: Option<String>,

    #[arg(long)]
    pub favorite_celebrities: Option<String>,

    #[arg(long)]
    pub learning_style: Option<String>,

    #[arg(long)]
    pub interests: Option<String>,
}

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Change username, email or password
    Update {
        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: Option<String>,
    },

    /// Change password (prompted when flags are omitted)
    Password {
        /// Current password
        #[arg(long)]
        old: Option<String>,

        /// New password
        #[arg(long)]
        new: Option<String>,
    },
}

/// Chat subcommands
#[derive(Subcommand, Debug)]
pub enum ChatCommands {
    /// Conversation with another student
    Peer {
        /// Peer user ID
        peer_id: i64,

        /// Number of messages to show
        #[arg(long, short = 'n', default_value_t = 20)]
        limit: u32,

        /// Send a message before showing the history
        #[arg(long, short = 's')]
        send: Option<String>,
    },

    /// Talk to the Socratic mentor
    Mentor {
        /// Your message
        #[arg(required_unless_present = "clear")]
        text: Option<String>,

        /// Clear the mentor conversation history
        #[arg(long, conflicts_with = "text")]
        clear: bool,
    },
}

/// Space subcommands
#[derive(Subcommand, Debug)]
pub enum SpaceCommands {
    /// List saved recommendations
    List,

    /// Save a recommendation
    Save(SaveRecommendationArgs),

    /// Remove a saved recommendation
    Remove {
        /// Saved recommendation ID
        id: i64,
    },

    /// List notes
    Notes {
        /// Only notes attached to this saved recommendation
        #[arg(long, short = 'r')]
        recommendation: Option<i64>,
    },

    /// Manage notes
    #[command(subcommand)]
    Note(NoteCommands),

    /// Update your skill self-assessment
    Skills(SkillArgs),

    /// Compare your skills with an occupation
    Compare {
        /// OaSIS occupation code
        oasis_code: String,
    },
}

/// Fields for saving a recommendation
#[derive(Debug, Clone, Args)]
pub struct SaveRecommendationArgs {
    /// OaSIS occupation code
    pub oasis_code: String,

    /// Occupation label
    #[arg(long, short = 'l')]
    pub label: String,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub main_duties: Option<String>,
}

/// Skill levels (1-5)
#[derive(Debug, Clone, Args, Default)]
pub struct SkillArgs {
    #[arg(long)]
    pub creativity: Option<f64>,

    #[arg(long)]
    pub leadership: Option<f64>,

    #[arg(long)]
    pub digital_literacy: Option<f64>,

    #[arg(long)]
    pub critical_thinking: Option<f64>,

    #[arg(long)]
    pub problem_solving: Option<f64>,
}

/// Note subcommands
#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Add a note
    Add {
        /// Note text
        content: String,

        /// Attach to a saved recommendation
        #[arg(long, short = 'r')]
        recommendation: Option<i64>,
    },

    /// Replace a note's text
    Edit {
        /// Note ID
        id: i64,

        /// New text
        content: String,
    },

    /// Delete a note
    Rm {
        /// Note ID
        id: i64,
    },
}

/// Resume subcommands
#[derive(Subcommand, Debug)]
pub enum CvCommands {
    /// List your resumes
    List,

    /// Open your resume in the editor, creating one if needed
    Open,

    /// Create a new resume
    New,
}
