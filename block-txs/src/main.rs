use block_txs::{config::Config, transport::HttpTransport};
use tracing_subscriber::EnvFilter;

/// Application entry point
///
/// Sets up logging, loads configuration, collects the transactions of the
/// configured block and prints them to stdout. Logs go to stderr.
#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    // Our crate at info, HTTP internals only when something is wrong
    let filter = EnvFilter::from_default_env()
        .add_directive("block_txs=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let transport = HttpTransport::new()?;

    match block_txs::run(&config, transport).await? {
        Some(details) => println!("{}", serde_json::to_string_pretty(&details)?),
        None => println!("no transactions in block {}", config.block_height),
    }

    Ok(())
}
