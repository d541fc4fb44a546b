use crate::config::Config;
use ghprofile_core::ProfileServiceLocation;
use ghprofile_http::{GetHttpClient, HttpClient};

use entrait::Impl;
use std::sync::Arc;

#[derive(Clone)]
pub struct App {
    pub config: Arc<Config>,
    pub http: HttpClient,
}

impl App {
    pub fn init(config: Config) -> anyhow::Result<Impl<Self>> {
        let http = HttpClient::init(&config.user_agent)?;

        Ok(Impl::new(App {
            config: Arc::new(config),
            http,
        }))
    }
}

impl ProfileServiceLocation for App {
    fn profile_base_url(&self) -> &url::Url {
        &self.config.profile_base_url
    }
}

impl GetHttpClient for App {
    fn get_http_client(&self) -> &HttpClient {
        &self.http
    }
}
