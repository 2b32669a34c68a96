use tracing_subscriber::EnvFilter;

use tram_server::cache::{CacheConfig, CachedLiveSource};
use tram_server::config::{AppConfig, LiveMode};
use tram_server::data::load_network;
use tram_server::tfgm::{LiveSource, MockTfgmClient, TfgmClient, TfgmConfig};
use tram_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().expect("invalid configuration");

    // Load the static network snapshot (fail fast if it is broken)
    let network = load_network(&config.data_dir).expect("failed to load network fixtures");

    // Choose the live departure source once, up front
    let source = match config.live_mode {
        LiveMode::Api => {
            let api_key = config.tfgm_api_key.unwrap_or_else(|| {
                eprintln!("Warning: TFGM_API_KEY not set. Live departure calls will fail.");
                String::new()
            });
            let client =
                TfgmClient::new(TfgmConfig::new(api_key)).expect("failed to create TfGM client");
            LiveSource::Api(client)
        }
        LiveMode::Mock => {
            let mock = MockTfgmClient::from_dir(&config.mock_dir)
                .expect("failed to load mock departure data");
            LiveSource::Mock(mock)
        }
    };
    let live = CachedLiveSource::new(source, &CacheConfig::default());

    let state = AppState::new(network.stops, network.routes, live);
    let app = create_router(state);

    let addr = config.bind_addr;
    println!("Tram Journey Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health        - Health check");
    println!("  GET /journey/plan  - Plan a journey (origin, destination)");
    println!("  GET /departures    - Live departure board (stop)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
