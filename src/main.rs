use kombi::config::Config;
use kombi::engine::Engine;
use kombi::error::Error;
use kombi::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let engine = Engine::new(&config)?;

    serve(engine, config.bind_addr).await
}
