//! Shared application state for all routes. The store is injected here and
//! reaches handlers through `State<AppState>`.

use crate::store::BizStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BizStore>,
}

impl AppState {
    pub fn new(store: impl BizStore + 'static) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
