use aristay_client::prelude::*;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let token = env::args().nth(1).ok_or("usage: save_token <token>")?;
    let config = Config::new();

    let credential = StoredCredential::new(FileStore::new(&config.storage.path));
    credential.save_token(&token).await?;
    info!("Token saved to {}", credential.store().path().display());

    let client = Client::from_config(config)?;
    let me = client.current_user().await?;
    info!("Logged in as {}", me.display_name());

    // anonymous endpoint
    let cleaning = client.list_cleaning_tasks().await?;
    info!("{} cleaning task(s) on the server", cleaning.len());

    Ok(())
}
