use std::sync::Arc;

use crate::api::CodeforcesClient;

pub mod stats;

pub struct AppState<T> {
    pub client: Arc<CodeforcesClient<T>>,
}
