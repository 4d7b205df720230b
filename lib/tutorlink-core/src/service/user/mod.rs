pub mod dto;
pub mod service;

pub(crate) mod validator;

use std::sync::Arc;

use crate::config::CoreConfig;
use crate::provider::http_client::HttpClient;
use crate::service::session::SessionService;
use crate::store::RefreshSignal;

#[derive(Clone)]
pub struct UserService {
    client: Arc<dyn HttpClient>,
    session: Arc<SessionService>,
    refresh_signal: Arc<RefreshSignal>,
    config: Arc<CoreConfig>,
}

impl UserService {
    pub(crate) fn new(
        client: Arc<dyn HttpClient>,
        session: Arc<SessionService>,
        refresh_signal: Arc<RefreshSignal>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            client,
            session,
            refresh_signal,
            config,
        }
    }
}
