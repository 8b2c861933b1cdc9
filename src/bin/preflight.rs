use sbt_mint_backend::infra::config::{self, AccountStoreKind};
use sbt_mint_backend::storage::accounts::schema_registered;
use sbt_mint_backend::{AccountStore, PostgresAccountStore};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--skip-mint-service]\n\
         \n\
         Requires env vars:\n\
           SBT_MINT_URL\n\
           DATABASE_URL (unless ACCOUNT_STORE=memory)\n\
         Optional:\n\
           DATABASE_MAX_CONNECTIONS, MINT_TIMEOUT_SECS, BIND_ADDR\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let skip_mint_service = args.iter().any(|a| a == "--skip-mint-service");

    // Force-read config (nice error messages if missing)
    let store_kind = config::account_store_kind()?;
    let mint_url = config::sbt_mint_url()?;
    let timeout = config::mint_timeout()?;

    info!("Preflight:");
    info!("  ACCOUNT_STORE={:?}", store_kind);
    info!("  SBT_MINT_URL={}", mint_url);
    info!("  MINT_TIMEOUT_SECS={}", timeout.as_secs());
    info!("  BIND_ADDR={}", config::bind_addr());

    match store_kind {
        AccountStoreKind::Postgres => {
            let store = PostgresAccountStore::connect().await?;
            store.ping().await?;
            info!("  Database reachable.");
            if !schema_registered() {
                return Err(anyhow::anyhow!("smart_accounts schema was not registered"));
            }
            info!("  smart_accounts table present.");
        }
        AccountStoreKind::Memory => {
            warn!("  ACCOUNT_STORE=memory: skipping database checks.");
        }
    }

    // Mint service reachability only. Minting itself is not exercised here.
    if skip_mint_service {
        warn!("  --skip-mint-service: not contacting {}", mint_url);
    } else {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let response = client
            .head(&mint_url)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Mint service unreachable at {}: {}", mint_url, e))?;
        info!("  Mint service reachable (HEAD -> {}).", response.status());
    }

    info!("Preflight OK.");
    Ok(())
}
