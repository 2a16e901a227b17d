//! Feedtags CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Show tag categories (default command)
//! feedtags
//!
//! # Search, then open the options menu for a result
//! feedtags search kube
//! feedtags search php --menu php
//!
//! # Change the feed's tag sets
//! feedtags follow rust go
//! feedtags block php
//! feedtags unblock php
//!
//! # Settings panel
//! feedtags prefs show
//! feedtags prefs toggle new-tab
//! ```
//!
//! # Configuration
//!
//! On first run, feedtags prompts for initial setup. Configuration is stored in
//! the user's config directory (`~/.config/feedtags/config.toml` on Linux).
//! Log output goes to stderr and is filtered by `FEEDTAGS_LOG`, falling back
//! to the `log_filter` setting.

use feedtags::{
    FeedTagsError,
    cli::{Cli, Commands},
    commands::{self, CommandContext},
    config::AppConfig,
    store::SledStore,
    ui::{DialoguerInput, OutputWriter, StdoutWriter},
};
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, FeedTagsError>;

const LOG_ENV: &str = "FEEDTAGS_LOG";

fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(feedtags::config::DEFAULT_LOG_FILTER));

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
}

fn run(cli: &Cli, mut config: AppConfig, output: &dyn OutputWriter) -> Result<()> {
    let command = cli.get_command();

    if let Commands::Config(command) = &command {
        let path = AppConfig::config_path()?;
        return commands::config::execute(&mut config, &path, command, output);
    }

    let db_path = config.resolve_database(cli.db.as_deref())?;
    debug!(path = %db_path.display(), "opening store");
    let store = Arc::new(SledStore::open(&db_path)?);
    let catalog = commands::load_catalog(&config)?;
    let input = DialoguerInput::new();

    let mut ctx = CommandContext::new(Arc::clone(&store), catalog, &config, output, &input);
    if cli.anonymous {
        ctx = ctx.anonymous();
    }

    match &command {
        Commands::Browse => commands::browse(&ctx)?,
        Commands::Search { query, menu } => commands::search(&ctx, query, menu.as_deref())?,
        Commands::Follow { tags } => commands::tags::follow(&ctx, tags)?,
        Commands::Unfollow { tags } => commands::tags::unfollow(&ctx, tags)?,
        Commands::Block { tags } => commands::tags::block(&ctx, tags)?,
        Commands::Unblock { tag, yes } => commands::tags::unblock(&ctx, tag, *yes)?,
        Commands::Status { json } => commands::status(&ctx, *json)?,
        Commands::Prefs(command) => commands::prefs::execute(&ctx, command)?,
        Commands::Onboarding => commands::onboarding(&ctx)?,
        Commands::Config(_) => {}
    }

    if let Err(err) = store.flush() {
        warn!(error = %err, "failed to flush store");
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse_args();

    let config = match AppConfig::load_or_setup() {
        Ok(config) => config,
        Err(err) => {
            init_tracing(feedtags::config::DEFAULT_LOG_FILTER);
            StdoutWriter::new().error(&format!("Configuration error: {err}"));
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_filter);

    let output = StdoutWriter::quiet(cli.quiet || config.quiet);
    if let Err(err) = run(&cli, config, &output) {
        output.error(&err.to_string());
        std::process::exit(1);
    }
}
