use room_token_service::app_state::AppState;
use room_token_service::utils::Config;
use room_token_service::Application;

#[tokio::main]
async fn main() {
    env_logger::init();

    // Missing or weak secrets stop the process here; nothing is ever issued
    // with a fallback key.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    log::debug!("loaded {:?}", config);

    let address = config.bind_address().to_owned();
    let app_state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("failed to initialise token issuer: {e}");
            std::process::exit(1);
        }
    };

    let app = Application::build(app_state, &address)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
