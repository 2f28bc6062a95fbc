mod menu;
mod samples;
mod scenario;
mod session;

use clap::{Parser, Subcommand};
use promo_client::PromoClient;
use promo_core::{AppConfig, Credentials};
use tracing_subscriber::EnvFilter;

use crate::scenario::Scenario;

#[derive(Debug, Parser)]
#[command(name = "promo-cli")]
#[command(about = "Qixol Promo integration sample")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Menu,
    /// Run one scenario and print its report
    Run {
        #[arg(value_enum)]
        scenario: Scenario,
    },
    /// List the scenarios with their menu keys
    Scenarios,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = promo_core::load_app_config()?;

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Scenarios => {
            for scenario in Scenario::ALL {
                println!(
                    "{}  {:<24} {}",
                    scenario.key(),
                    scenario.cli_name(),
                    scenario.label()
                );
            }
        }
        Commands::Run { scenario } => {
            let Some((client, credentials)) = connect(&config)? else {
                return Ok(());
            };
            let now = chrono::Utc::now().naive_utc();
            println!(
                "{}",
                session::run_scenario(&client, &credentials, scenario, now).await
            );
        }
        Commands::Menu => {
            let Some((client, credentials)) = connect(&config)? else {
                return Ok(());
            };
            let stdin = std::io::stdin();
            menu::run_menu(&client, &credentials, stdin.lock(), std::io::stdout()).await?;
        }
    }

    Ok(())
}

/// Builds the client, or prints key guidance and returns `None` when the
/// keys are not configured.
fn connect(config: &AppConfig) -> anyhow::Result<Option<(PromoClient, Credentials)>> {
    let credentials = match config.credentials() {
        Ok(credentials) => credentials,
        Err(warnings) => {
            print!("{}", menu::render_config_warnings(&warnings));
            return Ok(None);
        }
    };

    tracing::debug!(
        service_target = %config.service_target,
        base_url = config.effective_base_url(),
        "using promotions service"
    );
    let client = PromoClient::with_base_url(
        config.effective_base_url(),
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    Ok(Some((client, credentials)))
}
