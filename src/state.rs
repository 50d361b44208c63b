use std::sync::Arc;

use crate::config::Config;
use crate::dedup::DedupCache;
use crate::email::Mailer;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub mailer: Arc<dyn Mailer>,
    pub dedup: DedupCache,
}
