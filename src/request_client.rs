use lazy_static::lazy_static;
use reqwest::ClientBuilder;

const USER_AGENT: &str = concat!("codecov-appveyor/", env!("CARGO_PKG_VERSION"));

lazy_static! {
    // No retry middleware: the request body is a file stream and cannot be replayed
    pub static ref STREAMING_CLIENT: reqwest::Client = ClientBuilder::new()
        .user_agent(USER_AGENT)
        .build()
        .unwrap();
}
