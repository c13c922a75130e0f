use plantwatch::server::{
    config::Config, error::Error, model::app::AppState, router, service::pin::PinService,
    startup,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;
    let pin_service = PinService::new(&config.pin_file_path);

    if !pin_service.is_pin_set().await {
        tracing::warn!("No application PIN set, the default PIN is in effect until it is changed");
    }

    let router = router::routes().with_state(AppState { db, pin_service });

    let listener = tokio::net::TcpListener::bind(config.listen_address).await?;
    tracing::info!("Starting server on http://{}", config.listen_address);

    axum::serve(listener, router).await?;

    Ok(())
}
