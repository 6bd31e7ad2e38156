use std::sync::Arc;

use login_client::{
    AppConfig, BrowserNavigator, ConsoleNotifier, HttpLoginClient, LoginSubmitter,
    PromptFormSource, SubmitOutcome,
};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().expect("LOGIN_BASE_URL required");
    let transport = HttpLoginClient::new(config.timeouts).expect("HTTP client init failed");

    tracing::info!(base_url = %config.base_url, "login-client starting");

    let submitter = LoginSubmitter::new(
        config,
        Arc::new(transport),
        Arc::new(ConsoleNotifier),
        Arc::new(BrowserNavigator),
    );

    match submitter.submit_login_form(&PromptFormSource).await {
        SubmitOutcome::Redirected { status } => {
            tracing::info!(status, "login attempt succeeded");
        }
        SubmitOutcome::Rejected { .. } => std::process::exit(1),
    }
}
