use tracing::instrument;

pub const GREETING: &str = "Hello World!";

#[instrument]
pub async fn handler() -> &'static str {
    GREETING
}
