use std::time::Duration;

use reqwest::{
    blocking::{
        Client,
        Response,
    },
    header::{
        ACCEPT_ENCODING,
        USER_AGENT,
    },
    StatusCode,
};
use tracing::{
    debug,
    warn,
};

use crate::core::YomikataError;

const MAX_ATTEMPTS: usize = 3;

pub fn http_client() -> Result<Client, YomikataError> {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .map_err(|e| YomikataError::Custom(format!("HTTP client build failed: {e}")))
}

/// GET `url` and hand back the body as a stream. Connection failures, 5xx and
/// 429 are retried up to `MAX_ATTEMPTS` times; once a body is returned,
/// reading it is the caller's business.
pub fn get_with_retry(client: &Client, url: &str) -> Result<Response, YomikataError> {
    let mut attempt = 1;
    loop {
        debug!(url, attempt, "requesting");
        let outcome = client
            .get(url)
            .header(USER_AGENT, "yomikata/0.1 (+reqwest)")
            .header(ACCEPT_ENCODING, "identity")
            .send();

        match outcome {
            Ok(resp) if resp.status().is_success() => return Ok(resp),
            Ok(resp) => {
                let status = resp.status();
                if !is_retryable(status) || attempt >= MAX_ATTEMPTS {
                    return Err(YomikataError::Custom(format!("HTTP error {} from {}", status, url)));
                }
                warn!(url, attempt, %status, "server refused, retrying");
            }
            Err(e) => {
                if attempt >= MAX_ATTEMPTS {
                    return Err(e.into());
                }
                warn!(url, attempt, error = %e, "request failed, retrying");
            }
        }

        std::thread::sleep(backoff(attempt));
        attempt += 1;
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

fn backoff(attempt: usize) -> Duration {
    Duration::from_secs(2 * attempt as u64)
}
