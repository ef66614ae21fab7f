use crate::catalog::MoodCatalog;
use crate::store::SessionData;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<MoodCatalog>,
    pub sessions: Arc<Mutex<HashMap<String, SessionData>>>,
    pub recent_limit: usize,
}

impl AppState {
    pub fn new(catalog: MoodCatalog, recent_limit: usize) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            recent_limit,
        }
    }
}
