use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use snapmeal_api::{
    application::{
        http::server::http_server::{router, serve, state},
        logging::init_logger,
    },
    args::Args,
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    serve(router, &args.server).await
}
