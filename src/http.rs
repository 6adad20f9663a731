use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;

pub const MAX_RETRIES: u32 = 5;

/// Client that retries transient failures with exponential backoff.
/// `max_retries` of 0 sends each request once.
pub fn build_client(max_retries: u32) -> ClientWithMiddleware {
    let builder = ClientBuilder::new(Client::new());

    if max_retries == 0 {
        return builder.build();
    }

    builder
        .with(RetryTransientMiddleware::new_with_policy(
            ExponentialBackoff::builder().build_with_max_retries(max_retries),
        ))
        .build()
}
