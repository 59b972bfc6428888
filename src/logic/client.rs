use crate::model::api::{
    BackendState, ProcessQrRequest, ProcessQrResponse, SetIntervalRequest, SetIntervalResponse,
};

const XHR_HEADER: &str = "X-Requested-With";
const XHR_VALUE: &str = "XMLHttpRequest";

/// Typed boundary over the four backend endpoints.
///
/// The JSON endpoints are parsed without checking the HTTP status code: the
/// backend answers rejected requests with error JSON and a 400, and the
/// caller branches on the `status` field instead.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// `accept_invalid_certs` allows the self-signed development
    /// certificate the backend serves HTTPS with.
    pub fn new(base_url: &str, accept_invalid_certs: bool) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;
        Ok(Self {
            http,
            base: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn get_state(&self) -> Result<BackendState, reqwest::Error> {
        self.http
            .get(self.url("/get_state"))
            .send()
            .await?
            .json()
            .await
    }

    pub async fn process_qr(&self, data: &str) -> Result<ProcessQrResponse, reqwest::Error> {
        self.http
            .post(self.url("/process_qr"))
            .header(XHR_HEADER, XHR_VALUE)
            .json(&ProcessQrRequest { data })
            .send()
            .await?
            .json()
            .await
    }

    pub async fn set_heartbeat_interval(
        &self,
        interval: &str,
    ) -> Result<SetIntervalResponse, reqwest::Error> {
        self.http
            .post(self.url("/set_heartbeat_interval"))
            .header(XHR_HEADER, XHR_VALUE)
            .json(&SetIntervalRequest { interval })
            .send()
            .await?
            .json()
            .await
    }

    /// The response is ignored entirely; only a transport failure surfaces.
    pub async fn clear_config(&self) -> Result<(), reqwest::Error> {
        self.http
            .post(self.url("/clear_config"))
            .header(XHR_HEADER, XHR_VALUE)
            .send()
            .await?;
        Ok(())
    }
}
