pub mod dto;
pub mod mapper;
pub mod service;

pub(crate) mod validator;

use std::sync::Arc;

use crate::config::CoreConfig;
use crate::provider::http_client::HttpClient;
use crate::service::session::SessionService;

#[derive(Clone)]
pub struct BookingService {
    client: Arc<dyn HttpClient>,
    session: Arc<SessionService>,
    config: Arc<CoreConfig>,
}

impl BookingService {
    pub(crate) fn new(
        client: Arc<dyn HttpClient>,
        session: Arc<SessionService>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            client,
            session,
            config,
        }
    }
}

#[cfg(test)]
mod test;
