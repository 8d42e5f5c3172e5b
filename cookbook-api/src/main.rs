use cookbook_api::{
    config::Config, error::Result, observability::init_tracing, routes::in_memory_router,
    server::Server,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    let app = in_memory_router(&config.service.name);

    Server::new(config).serve(app).await
}
