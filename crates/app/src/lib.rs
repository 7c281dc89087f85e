//! Backoffice application composition root
//!
//! Wires the seeded in-memory stores, the text-generation collaborator,
//! and the notification sink into a ready-to-use application state.

use std::sync::Arc;

use backoffice_common::{Config, Latency, NotificationSink, TracingSink};
use backoffice_customers::CustomerRepository;
use backoffice_dashboard::DashboardService;
use backoffice_genai::TextGeneratorFactory;
use backoffice_messaging::{ConversationStore, DraftGenerator, InboxController};
use backoffice_orders::OrderRepository;
use backoffice_products::ProductRepository;

pub mod seed;

/// Fully wired application state
#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerRepository,
    pub products: ProductRepository,
    pub orders: OrderRepository,
    pub conversations: ConversationStore,
    pub dashboard: DashboardService,
    pub drafts: DraftGenerator,
    pub notifier: Arc<dyn NotificationSink>,
}

impl AppState {
    /// Build a new inbox session over the shared stores
    pub fn inbox_controller(&self) -> InboxController {
        InboxController::new(
            self.conversations.clone(),
            self.drafts.clone(),
            self.notifier.clone(),
        )
    }
}

/// Create the application from configuration, seeding the mock stores
pub fn create_app(config: &Config) -> Result<AppState, anyhow::Error> {
    let latency = Latency::from_millis(config.mock_latency_ms);

    let customers = CustomerRepository::seeded(seed::customers(), latency);
    let products = ProductRepository::seeded(seed::products(), latency);
    let orders = OrderRepository::seeded(seed::orders(), latency);
    let conversations = ConversationStore::seeded(seed::conversations(), latency);

    let genai = TextGeneratorFactory::create(
        config.gemini_api_key.clone(),
        config.genai_model.clone(),
    );
    let drafts = DraftGenerator::new(Arc::from(genai));
    let notifier: Arc<dyn NotificationSink> = Arc::new(TracingSink::new());

    let dashboard =
        DashboardService::new(customers.clone(), orders.clone(), conversations.clone());

    Ok(AppState {
        customers,
        products,
        orders,
        conversations,
        dashboard,
        drafts,
        notifier,
    })
}
