//! Headless client core for the tutoring-marketplace app: the enquiry
//! lifecycle, wizard controllers, form validation, round aggregation, demo
//! scheduling, and session plumbing. The mobile shell supplies rendering,
//! navigation, and the device key-value store behind [`provider`] seams.

use std::sync::Arc;

use config::CoreConfig;
use provider::device_storage::DeviceStorage;
use provider::http_client::HttpClient;
use provider::http_client::reqwest_client::ReqwestClient;
use service::auth::AuthService;
use service::booking::BookingService;
use service::demo::DemoService;
use service::enquiry::EnquiryService;
use service::session::SessionService;
use service::tutor_round::TutorRoundService;
use service::user::UserService;
use store::{RefreshSignal, UserCache};

pub mod common_mapper;
pub mod common_validator;
pub mod config;
pub mod model;
pub mod provider;
pub mod service;
pub mod store;
pub mod validator;
pub mod wizard;

pub struct TutorlinkCore {
    pub auth_service: AuthService,
    pub booking_service: BookingService,
    pub demo_service: DemoService,
    pub enquiry_service: EnquiryService,
    pub session_service: Arc<SessionService>,
    pub tutor_round_service: TutorRoundService,
    pub user_service: UserService,

    pub refresh_signal: Arc<RefreshSignal>,
    pub config: Arc<CoreConfig>,
}

impl TutorlinkCore {
    pub fn new(
        config: CoreConfig,
        client: Arc<dyn HttpClient>,
        storage: Arc<dyn DeviceStorage>,
    ) -> Self {
        let config = Arc::new(config);
        let user_cache = Arc::new(UserCache::new());
        let refresh_signal = Arc::new(RefreshSignal::new());
        let session_service = Arc::new(SessionService::new(storage, user_cache));

        Self {
            auth_service: AuthService::new(
                client.clone(),
                session_service.clone(),
                refresh_signal.clone(),
                config.clone(),
            ),
            booking_service: BookingService::new(
                client.clone(),
                session_service.clone(),
                config.clone(),
            ),
            demo_service: DemoService::new(
                client.clone(),
                session_service.clone(),
                config.clone(),
            ),
            enquiry_service: EnquiryService::new(
                client.clone(),
                session_service.clone(),
                refresh_signal.clone(),
                config.clone(),
            ),
            tutor_round_service: TutorRoundService::new(
                client.clone(),
                session_service.clone(),
                config.clone(),
            ),
            user_service: UserService::new(
                client,
                session_service.clone(),
                refresh_signal.clone(),
                config.clone(),
            ),
            session_service,
            refresh_signal,
            config,
        }
    }

    /// Environment-configured core with the default reqwest transport; the
    /// shell still provides the persistent storage backend.
    pub fn from_env(storage: Arc<dyn DeviceStorage>) -> Result<Self, config::ConfigError> {
        let config = CoreConfig::from_env()?;
        let client = Arc::new(ReqwestClient::with_timeout(config.api.request_timeout()));
        Ok(Self::new(config, client, storage))
    }
}
