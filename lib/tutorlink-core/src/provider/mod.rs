pub mod device_storage;
pub mod http_client;
