//! Admin Dashboard - Main Entry Point
//!
//! Loads the dashboard from the hosted table store (or an in-memory demo
//! store), applies an optional edit and prints the page.

use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use admin_dash::components::Pager;
use admin_dash::connection::BackendConfig;
use admin_dash::constants::{ENV_BACKEND_API_KEY, ENV_BACKEND_URL, PAGE_SIZE_OPTIONS};
use admin_dash::domain::{RecordId, TicketStatus};
use admin_dash::features::cards::{CardForm, CardsController};
use admin_dash::features::services::{ServiceForm, ServicesController};
use admin_dash::features::tickets::{TicketForm, TicketsController};
use admin_dash::helpers::get_or_create_data_dir;
use admin_dash::services::{MemoryTableStore, RestTableStore, TableStore};
use admin_dash::state::Dashboard;
use admin_dash::views::DashboardView;

#[derive(Parser)]
#[command(name = "admin-dash", about = "Admin dashboard over a hosted table store", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use a seeded in-memory store instead of the hosted one
    #[arg(long, global = true)]
    memory: bool,

    /// Backend URL (overrides the config file)
    #[arg(long, global = true, env = ENV_BACKEND_URL)]
    url: Option<String>,

    /// Backend API key (overrides the config file)
    #[arg(long, global = true, env = ENV_BACKEND_API_KEY, hide_env_values = true)]
    api_key: Option<String>,

    /// Rows per page shown under the tickets table
    #[arg(long, global = true, default_value_t = 10)]
    page_size: usize,

    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and print the dashboard (default)
    Show,
    /// Add a summary card
    AddCard {
        #[arg(long)]
        title: String,
        #[arg(long)]
        value: String,
        #[arg(long)]
        subtitle: String,
    },
    /// Add a service
    AddService {
        #[arg(long)]
        name: String,
        /// Progress percentage; non-numeric input counts as 0
        #[arg(long, default_value = "0")]
        progress: String,
        #[arg(long, default_value = "0")]
        forms_submitted: String,
    },
    /// Add a ticket
    AddTicket(TicketArgs),
    /// Edit an existing ticket
    UpdateTicket {
        id: String,
        #[command(flatten)]
        fields: TicketArgs,
    },
    /// Delete a ticket
    DeleteTicket { id: String },
    /// Inspect or change the backend configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
struct TicketArgs {
    #[arg(long)]
    customer: Option<String>,
    #[arg(long)]
    issue: Option<String>,
    #[arg(long)]
    project: Option<String>,
    /// "To do", "Completed" or "Cancelled"
    #[arg(long)]
    status: Option<String>,
    /// YYYY-MM-DD; defaults to today for new tickets
    #[arg(long)]
    date: Option<String>,
}

impl TicketArgs {
    fn apply(&self, form: &mut TicketForm) -> anyhow::Result<()> {
        for (field, value) in [
            ("customer", &self.customer),
            ("issue", &self.issue),
            ("project", &self.project),
            ("date", &self.date),
        ] {
            if let Some(value) = value {
                form.set_field(field, value)?;
            }
        }
        if let Some(status) = &self.status {
            form.set_status(TicketStatus::from(status.as_str()));
        }
        Ok(())
    }
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration with the key masked
    Show,
    /// Save the URL and/or API key to the config file
    Set {
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        api_key: Option<String>,
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

/// Stderr output plus a daily log file when the data directory is usable
fn init_logging(level: &str) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .context("invalid log level")?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(LocalTime::rfc_3339());

    let (file_layer, guard) = if let Ok(data_dir) = get_or_create_data_dir() {
        let appender = tracing_appender::rolling::daily(data_dir.join("logs"), "admin-dash.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .with_writer(writer)
            .with_timer(LocalTime::rfc_3339())
            .with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(&cli.log_level)?;

    info!("Starting admin dashboard...");

    let command = match cli.command.unwrap_or(Commands::Show) {
        Commands::Config { action } => return configure(action),
        other => other,
    };

    if !PAGE_SIZE_OPTIONS.contains(&cli.page_size) {
        bail!(
            "page size must be one of {:?}, got {}",
            PAGE_SIZE_OPTIONS,
            cli.page_size
        );
    }
    let pager = Pager::new().with_page_size(cli.page_size);

    if cli.memory {
        let store = MemoryTableStore::demo()?;
        run(Dashboard::new(store), command, pager).await
    } else {
        let config = BackendConfig::load()?.with_overrides(cli.url, cli.api_key);
        let store = RestTableStore::new(&config)?;
        info!(url = %config.url, "Using hosted table store");
        run(Dashboard::with_shared_store(Arc::new(store)), command, pager).await
    }
}

async fn run<S: TableStore>(
    dashboard: Dashboard<S>,
    command: Commands,
    pager: Pager,
) -> anyhow::Result<()> {
    let mut view = DashboardView::new(dashboard.events());
    view.pager = pager;

    let report = dashboard.load().await;
    if !report.all_ok() {
        debug!(?report, "Some sections failed to load");
    }

    match command {
        Commands::Show | Commands::Config { .. } => {}
        Commands::AddCard {
            title,
            value,
            subtitle,
        } => {
            let mut form = CardForm::default();
            form.open();
            form.set_field("title", title)?;
            form.set_field("value", value)?;
            form.set_field("subtitle", subtitle)?;
            CardsController::new(dashboard.cards.clone())
                .submit(&mut form)
                .await?;
        }
        Commands::AddService {
            name,
            progress,
            forms_submitted,
        } => {
            let mut form = ServiceForm::default();
            form.open();
            form.set_field("name", &name)?;
            form.set_field("progress", &progress)?;
            form.set_field("formsSubmitted", &forms_submitted)?;
            ServicesController::new(dashboard.services.clone())
                .submit(&mut form)
                .await?;
        }
        Commands::AddTicket(fields) => {
            let mut form = TicketForm::default();
            form.open_add();
            fields.apply(&mut form)?;
            TicketsController::new(dashboard.tickets.clone())
                .submit(&mut form)
                .await?;
        }
        Commands::UpdateTicket { id, fields } => {
            let id = RecordId::from(id.as_str());
            let Some(ticket) = dashboard.tickets.with_state(|s| s.get(&id).cloned()) else {
                bail!("no ticket with id {id}");
            };
            let mut form = TicketForm::default();
            form.open_edit(&ticket);
            fields.apply(&mut form)?;
            TicketsController::new(dashboard.tickets.clone())
                .submit(&mut form)
                .await?;
        }
        Commands::DeleteTicket { id } => {
            TicketsController::new(dashboard.tickets.clone())
                .delete(RecordId::from(id.as_str()))
                .await?;
        }
    }

    if view.pump() {
        let changed: Vec<_> = view.dirty_tables().collect();
        debug!(?changed, "Sections changed since load");
    }
    println!("{}", view.render(&dashboard.snapshot()));
    Ok(())
}

fn configure(action: ConfigAction) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let config = BackendConfig::load()?;
            println!("config file: {}", BackendConfig::default_path()?.display());
            println!("url:         {}", config.url);
            println!("api_key:     {}", config.masked_key());
            println!("timeout:     {}s", config.request_timeout_secs);
        }
        ConfigAction::Set {
            url,
            api_key,
            timeout_secs,
        } => {
            let path = BackendConfig::default_path()?;
            let mut config = BackendConfig::load_from(&path)?.with_overrides(url, api_key);
            if let Some(secs) = timeout_secs {
                config.request_timeout_secs = secs;
            }
            config.validate()?;
            let path = config.save()?;
            println!("saved {}", path.display());
        }
    }
    Ok(())
}
