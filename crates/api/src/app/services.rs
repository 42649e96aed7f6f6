//! Service wiring: the item store, the validation strategy and the message
//! catalog shared by every handler.

use std::sync::Arc;

use itemservice_infra::{InMemoryItemStore, ItemStore};
use itemservice_items::{ItemValidator, MessageCatalog, RuleSet};

use crate::config::ApiConfig;

#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ItemStore>,
    validator: Arc<dyn ItemValidator>,
    messages: Arc<MessageCatalog>,
}

impl AppServices {
    pub fn new(
        store: Arc<dyn ItemStore>,
        validator: Arc<dyn ItemValidator>,
        messages: MessageCatalog,
    ) -> Self {
        Self {
            store,
            validator,
            messages: Arc::new(messages),
        }
    }

    pub fn store(&self) -> &dyn ItemStore {
        self.store.as_ref()
    }

    pub fn validator(&self) -> &dyn ItemValidator {
        self.validator.as_ref()
    }

    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }
}

/// Build services from configuration (in-memory store, table-driven rules).
pub fn build_services(config: &ApiConfig) -> AppServices {
    let store = if config.seed_sample_data {
        InMemoryItemStore::with_sample_data()
    } else {
        InMemoryItemStore::new()
    };
    tracing::info!(
        items = store.len(),
        validate_fields = config.rules.validate_name_and_price_and_quantity,
        "item services ready"
    );

    AppServices::new(
        Arc::new(store),
        Arc::new(RuleSet::new(config.rules)),
        MessageCatalog::default(),
    )
}
