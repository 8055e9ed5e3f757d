use crate::attendance::Threshold;
use crate::store::SubjectStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SubjectStore>,
    pub threshold: Threshold,
}

impl AppState {
    pub fn new(store: impl SubjectStore + 'static, threshold: Threshold) -> Self {
        Self {
            store: Arc::new(store),
            threshold,
        }
    }
}
