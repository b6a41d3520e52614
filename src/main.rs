use std::io::Write;
use std::sync::Arc;

mod config;
mod error;
mod handler;
mod http;
mod logger;
mod server;

use handler::fixtures::FixtureStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // Current-thread runtime: handlers multiplex cooperatively, a test
    // fixture has no use for parallel request execution
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;
    let local_addr = listener.local_addr()?;

    let store = FixtureStore::load(&cfg.fixtures)?;
    let state = Arc::new(config::AppState::new(cfg, store));

    // Handshake with the parent test process: the resolved port is the
    // only thing ever written to stdout, flushed before the first accept
    announce_port(local_addr.port())?;

    logger::log_server_start(&local_addr, &state.config);

    // LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::start_server_loop(listener, state))
        .await
}

fn announce_port(port: u16) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{port}")?;
    stdout.flush()
}
