//! # Wallet Console
//!
//! Command-line smoke check against a running backend: signs in (when
//! `CONSOLE_EMAIL`/`CONSOLE_PASSWORD` are set), prints the dashboard summary
//! and the first page of users.
//!
//! ```text
//! API_BASE_URL=http://localhost:3001/api \
//! CONSOLE_EMAIL=admin@example.com CONSOLE_PASSWORD=... \
//!     cargo run --bin wallet-console
//! ```

use std::process::ExitCode;

use client::app::App;
use client::config::ClientConfig;
use client::logging::{self, LogConfig};
use client::Result;
use shared::short_address;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    let _log_guard = match logging::init(&LogConfig::from_env()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "wallet-console failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when a section could not be loaded.
async fn run() -> Result<bool> {
    let config = ClientConfig::from_env()?;
    tracing::info!(api_base_url = %config.api_base_url, "Starting wallet console");
    let app = App::from_config(config)?;

    sign_in(&app).await?;

    let mut complete = true;
    complete &= print_dashboard(&app).await;
    complete &= print_users(&app).await;
    Ok(complete)
}

async fn sign_in(app: &App) -> Result<()> {
    let email = lib_utils::get_env_opt("CONSOLE_EMAIL");
    let password = lib_utils::get_env_opt("CONSOLE_PASSWORD");

    match (email, password) {
        (Some(email), Some(password)) => {
            let user = app.auth.login(&email, &password).await?;
            println!("Signed in as {} <{}> ({})", user.full_name(), user.email, user.role);
        }
        _ if app.auth.restore_session().await => {
            if let Some(user) = app.auth.user() {
                println!("Resumed session for {}", user.email);
            }
        }
        _ => tracing::info!("No credentials configured, continuing without a session"),
    }
    Ok(())
}

async fn print_dashboard(app: &App) -> bool {
    app.dashboard.fetch().await;
    let state = app.dashboard.snapshot();

    println!();
    println!("Dashboard");
    match (state.metrics, state.error) {
        (Some(metrics), None) => {
            println!("  Users:         {} ({} active)", metrics.total_users, metrics.active_users);
            println!(
                "  Transactions:  {} (${:.2} volume)",
                metrics.total_transactions, metrics.transaction_volume
            );
            println!("  Pending KYC:   {}", metrics.pending_kyc);
            println!("  Total TVL:     ${:.2}", metrics.total_tvl);

            if !state.recent_activity.is_empty() {
                println!("  Recent activity:");
                for item in &state.recent_activity {
                    println!("    {}  {:<20} {}", item.created_at.format("%Y-%m-%d %H:%M"), item.kind, item.description);
                }
            }
            true
        }
        (_, error) => {
            println!("  unavailable: {}", error.unwrap_or_default());
            false
        }
    }
}

async fn print_users(app: &App) -> bool {
    app.users.fetch().await;
    let state = app.users.snapshot();

    println!();
    println!("Users");
    if let Some(error) = state.error {
        println!("  unavailable: {}", error);
        return false;
    }

    for user in &state.items {
        let wallet = user.wallet_address.as_deref().map(short_address).unwrap_or_default();
        println!(
            "  {:<28} {:<8} {:<10} {:<14} {}",
            user.email, user.role, user.status, user.kyc_status, wallet
        );
    }
    let pagination = state.pagination;
    println!(
        "  Page {} of {} ({} users)",
        pagination.page,
        pagination.total_pages().max(1),
        pagination.total
    );
    true
}
