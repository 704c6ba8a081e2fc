use crate::frontend::utils::errors::{FrontendError, FrontendResult};
use http::StatusCode;
use log::info;
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, sync::LazyLock};
use url::Url;

pub mod checkout;

pub static CLIENT: LazyLock<ApiClient> = LazyLock::new(|| {
    #[cfg(feature = "ssr")]
    {
        ApiClient::new(reqwest::Client::new(), None)
    }
    #[cfg(not(feature = "ssr"))]
    {
        ApiClient::new()
    }
});

#[derive(Clone, Debug)]
pub struct ApiClient {
    #[cfg(feature = "ssr")]
    client: reqwest::Client,
    pub hostname: String,
    ssl: bool,
}

impl ApiClient {
    #[cfg(feature = "ssr")]
    pub fn new(client: reqwest::Client, hostname_: Option<String>) -> Self {
        use leptos::config::get_config_from_str;
        let mut hostname = get_config_from_str(include_str!("../../../Cargo.toml"))
            .map(|options| options.site_addr.to_string())
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        // required for tests
        if let Some(hostname_) = hostname_ {
            hostname = hostname_;
        }
        Self {
            client,
            hostname,
            ssl: false,
        }
    }
    #[cfg(not(feature = "ssr"))]
    pub fn new() -> Self {
        let hostname = leptos::prelude::location().host().unwrap_or_default();
        let ssl = !cfg!(debug_assertions);
        Self { hostname, ssl }
    }

    #[cfg(feature = "ssr")]
    async fn post<P, T>(&self, path: &str, params: &P) -> FrontendResult<T>
    where
        P: Serialize + Debug,
        T: for<'de> Deserialize<'de>,
    {
        let res = self
            .client
            .post(self.request_endpoint(path)?)
            .form(params)
            .send()
            .await?;
        let status = res.status();
        let url = res.url().to_string();
        let text = res.text().await?;
        Self::response(status.into(), text, &url)
    }

    #[cfg(not(feature = "ssr"))]
    fn post<'a, P, T>(
        &'a self,
        path: &'a str,
        params: &'a P,
    ) -> impl std::future::Future<Output = FrontendResult<T>> + Send + 'a
    where
        P: Serialize + Debug,
        T: for<'de> Deserialize<'de>,
    {
        use gloo_net::http::Request;
        use leptos::prelude::on_cleanup;
        use send_wrapper::SendWrapper;
        use web_sys::RequestCredentials;

        SendWrapper::new(async move {
            let abort_controller = SendWrapper::new(web_sys::AbortController::new().ok());
            let abort_signal = abort_controller.as_ref().map(|a| a.signal());

            // abort in-flight requests if, e.g., we've navigated away from this page
            on_cleanup(move || {
                if let Some(abort_controller) = abort_controller.take() {
                    abort_controller.abort()
                }
            });

            let url = self.request_endpoint(path)?;
            let req = Request::post(url.as_str())
                .abort_signal(abort_signal.as_ref())
                .credentials(RequestCredentials::Include)
                .header("content-type", "application/x-www-form-urlencoded")
                .body(serde_urlencoded::to_string(params)?)?;
            let res = req.send().await?;
            let status = res.status();
            let text = res.text().await?;
            Self::response(status, text, &res.url())
        })
    }

    fn response<T>(status: u16, text: String, url: &str) -> FrontendResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        if status != StatusCode::OK {
            info!("API error: {text} on {url} status {status}");
            return Err(FrontendError::new(text));
        }
        serde_json::from_str(&text).map_err(|e| {
            info!("Failed to deserialize api response: {e} from {text} on {url}");
            FrontendError::new(text)
        })
    }

    fn request_endpoint(&self, path: &str) -> FrontendResult<Url> {
        let protocol = if self.ssl { "https" } else { "http" };
        Ok(Url::parse(&format!("{protocol}://{}{path}", &self.hostname))?)
    }
}
