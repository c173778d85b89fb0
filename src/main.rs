use dotenvy::dotenv;
use expense_desk::{
    config::{database, session::EnvSessionStorage, settings},
    core::{
        bill_list::BillList,
        navigation::{Navigator, Route},
        session::SessionContext,
    },
    errors::Result,
    store::DatabaseBillStore,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Navigation target for a terminal: there is no view to swap, so the route is only logged.
struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&mut self, route: Route) {
        info!("Navigating to {route}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables can also be set externally
    dotenv().ok();

    // 3. Settings and session
    let settings = settings::load_default_config()
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;
    match SessionContext::from_storage(&EnvSessionStorage) {
        Ok(session) => info!("Signed in as {} ({:?})", session.email, session.user_type),
        Err(e) => warn!("No session: {}", e),
    }

    // 4. Database
    let db = database::create_connection(&database::get_database_url(&settings))
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Render the bill list
    let store = DatabaseBillStore::new(db, &settings.attachments);
    let view = BillList::new(store, LoggingNavigator).load().await;
    print!("{view}");

    Ok(())
}
