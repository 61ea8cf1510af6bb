//! # Zweeti POS Terminal
//!
//! Entry point: tracing setup, configuration, the durable store, the login
//! gate, then the cashier loop.

mod auth;
mod commands;
mod error;
mod repl;
mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;
use zweeti_core::MenuCatalog;
use zweeti_store::{Store, StoreConfig};

use crate::auth::StubAuthProvider;
use crate::error::AppResult;
use crate::state::{AppConfig, AppContext, SessionState};

#[tokio::main]
async fn main() {
    // RUST_LOG controls verbosity; default keeps the terminal quiet except
    // for warnings so log lines don't interleave with the billing screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(err) = run().await {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let config = AppConfig::from_env();
    info!(
        store = %config.store_name,
        db = %config.database_path.display(),
        "Starting Zweeti POS terminal"
    );

    let store = Store::open(StoreConfig::new(config.database_path.clone())).await?;

    let ctx = AppContext {
        session: SessionState::new(config.tax_rate()),
        store,
        catalog: MenuCatalog::standard(),
        auth: Box::new(StubAuthProvider::new()),
        config,
    };

    if ctx.config.require_login {
        if !login_gate(&ctx).await? {
            ctx.store.close().await;
            return Ok(());
        }
    }

    repl::run(&ctx).await?;

    ctx.store.close().await;
    println!("Bye!");
    Ok(())
}

/// Phone + OTP gate. Returns false when input ended before sign-in.
async fn login_gate(ctx: &AppContext) -> AppResult<bool> {
    if let Some(user) = commands::login::current_user(&ctx.store).await? {
        println!("Signed in as {user}.");
        return Ok(true);
    }

    println!("Sign in to start billing.");
    loop {
        let Some(phone) = repl::prompt("Phone number: ")? else {
            return Ok(false);
        };
        if let Err(err) = commands::login::request_code(ctx.auth.as_ref(), &phone).await {
            println!("error: {err}");
            continue;
        }
        println!("OTP sent to {phone} (stub: any 6 digits work).");

        loop {
            let Some(code) = repl::prompt("OTP code (blank to re-enter phone): ")? else {
                return Ok(false);
            };
            if code.is_empty() {
                break;
            }
            match commands::login::complete_sign_in(ctx.auth.as_ref(), &ctx.store, &code).await {
                Ok(user_id) => {
                    println!("Signed in as {user_id}.");
                    return Ok(true);
                }
                Err(err) => println!("error: {err}"),
            }
        }
    }
}
