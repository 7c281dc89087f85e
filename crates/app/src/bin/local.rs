// Backoffice - local demonstration session
//
// Seeds the mock stores, prints the dashboard metrics, and walks the inbox
// workflow once: select the first unread conversation, generate an AI
// draft, accept it, and send the reply.

use tracing::{error, info};

use backoffice_common::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .pretty()
        .init();

    info!("Starting Backoffice local session");

    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(
        latency_ms = config.mock_latency_ms,
        genai = if config.gemini_api_key.is_some() { "gemini" } else { "mock" },
        "Configuration loaded"
    );

    let app = backoffice_app::create_app(&config)?;

    let stats = app.dashboard.stats().await?;
    info!(
        total_orders = stats.total_orders,
        pending_orders = stats.pending_orders,
        total_revenue = %stats.total_revenue,
        total_customers = stats.total_customers,
        unread_messages = stats.unread_messages,
        "Dashboard"
    );

    let mut inbox = app.inbox_controller();
    inbox.refresh().await;
    info!(
        conversations = inbox.conversations().len(),
        unread = inbox.total_unread(),
        "Inbox loaded"
    );

    // Pick the first conversation with unanswered customer messages
    let unread_id = inbox
        .conversations()
        .iter()
        .find(|c| c.unread_count > 0)
        .map(|c| c.id.clone());

    match unread_id {
        Some(id) => {
            inbox.select(&id);
            info!(conversation_id = %id, "Selected conversation");

            inbox.generate_draft().await;
            if let Some(draft) = inbox.pending_draft() {
                info!(draft = %draft, "AI draft ready");
                inbox.accept_draft();
                inbox.send_reply().await;
            }

            info!(unread = inbox.total_unread(), "Inbox after reply");
        }
        None => info!("No unread conversations"),
    }

    info!("Session complete");
    Ok(())
}
