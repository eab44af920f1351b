use rifa_api::db::postgres_service::PostgresService;
use std::sync::Arc;
use uuid::Uuid;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
}

impl TestContext {
    /// Fresh, isolated in-memory database per context; migrations run on
    /// connect. The named shared-cache URI keeps every pooled connection
    /// on the same database while isolating parallel tests.
    pub async fn new() -> TestContext {
        let db_url = format!(
            "sqlite:file:{}?mode=memory&cache=shared",
            Uuid::new_v4().simple()
        );
        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize database service"),
        );
        TestContext { db }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use rifa_api::types::raffle::RRaffleCreate;

    pub fn sample_raffle() -> RRaffleCreate {
        RRaffleCreate {
            title: "iPhone 15 Pro Max".to_string(),
            description: Some("Drawing once all numbers sell".to_string()),
            prize: Some("iPhone 15 Pro Max 256GB".to_string()),
            ticket_price_cents: 500,
            ticket_count: 100,
            draw_date: None,
        }
    }

    pub fn small_raffle(ticket_count: i32) -> RRaffleCreate {
        RRaffleCreate {
            title: "Small raffle".to_string(),
            description: None,
            prize: None,
            ticket_price_cents: 250,
            ticket_count,
            draw_date: None,
        }
    }
}
