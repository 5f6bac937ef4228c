//! Orientor CLI - Career guidance from the terminal

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod session;
mod view;

use cli::args::GlobalOptions;
use cli::{
    AccountCommands, ChatCommands, Cli, CommandContext, Commands, ConfigCommands, CvCommands,
    NoteCommands, ProfileCommands, SpaceCommands,
};
use client::OrientorApi;
use client::models::AccountUpdate;
use error::{Error, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        match err {
            // Navigation already told the user where to go
            Error::Redirected(route) => log::debug!("Exiting after redirect to {}", route),
            err => eprintln!("Error: {}", err),
        }
        std::process::exit(1);
    }
}

/// `--debug` turns on debug output for this crate; otherwise `RUST_LOG`
/// applies with a default of `warn`.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("orientor", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    if let Commands::Version = cli.command {
        println!("orientor version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    if let Commands::Config(ConfigCommands::SetUrl { url }) = &cli.command {
        return cli::config::set_url(&opts, url);
    }

    let ctx = CommandContext::new(&opts)?;
    dispatch(&ctx, &opts, cli.command).await
}

/// Route a parsed command to its handler
async fn dispatch<C: OrientorApi>(
    ctx: &CommandContext<C>,
    opts: &GlobalOptions,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::Login { email, password } => cli::auth::login(ctx, email, password).await,
        Commands::Register {
            username,
            email,
            password,
        } => cli::auth::register(ctx, username, email, password).await,
        Commands::Logout => cli::auth::logout(ctx),
        Commands::Status { check } => cli::status::run(ctx, opts, check).await,
        Commands::Whoami => cli::account::whoami(ctx).await,
        Commands::Version => Ok(()),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => cli::config::show(ctx, opts),
            ConfigCommands::SetUrl { url } => cli::config::set_url(opts, &url),
        },
        Commands::Profile(cmd) => match cmd {
            ProfileCommands::Show => cli::profile::show(ctx).await,
            ProfileCommands::Update(args) => cli::profile::update(ctx, args).await,
        },
        Commands::Account(cmd) => match cmd {
            AccountCommands::Update {
                username,
                email,
                password,
            } => {
                let update = AccountUpdate {
                    username,
                    email,
                    password,
                };
                cli::account::update(ctx, update).await
            }
            AccountCommands::Password { old, new } => {
                cli::account::password(ctx, old, new).await
            }
        },
        Commands::Peers { limit } => cli::peers::run(ctx, limit).await,
        Commands::Messages => cli::messages::run(ctx).await,
        Commands::Chat(cmd) => match cmd {
            ChatCommands::Peer {
                peer_id,
                limit,
                send,
            } => cli::chat::peer(ctx, peer_id, limit, send).await,
            ChatCommands::Mentor { clear: true, .. } => cli::chat::clear_mentor(ctx).await,
            ChatCommands::Mentor { text, .. } => {
                cli::chat::mentor(ctx, text.as_deref().unwrap_or_default()).await
            }
        },
        Commands::Search { query, top_k } => cli::search::run(ctx, &query, top_k).await,
        Commands::Space(cmd) => match cmd {
            SpaceCommands::List => cli::space::list(ctx).await,
            SpaceCommands::Save(args) => cli::space::save(ctx, args).await,
            SpaceCommands::Remove { id } => cli::space::remove(ctx, id).await,
            SpaceCommands::Notes { recommendation } => {
                cli::space::notes(ctx, recommendation).await
            }
            SpaceCommands::Note(note) => match note {
                NoteCommands::Add {
                    content,
                    recommendation,
                } => cli::space::add_note(ctx, &content, recommendation).await,
                NoteCommands::Edit { id, content } => {
                    cli::space::edit_note(ctx, id, &content).await
                }
                NoteCommands::Rm { id } => cli::space::remove_note(ctx, id).await,
            },
            SpaceCommands::Skills(args) => cli::space::skills(ctx, args).await,
            SpaceCommands::Compare { oasis_code } => cli::space::compare(ctx, &oasis_code).await,
        },
        Commands::Cv(cmd) => match cmd {
            CvCommands::List => cli::cv::list(ctx).await,
            CvCommands::Open => cli::cv::open(ctx).await,
            CvCommands::New => cli::cv::new(ctx).await,
        },
    }
}
