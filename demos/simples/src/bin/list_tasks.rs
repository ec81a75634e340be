use aristay_client::application::client::Client;
use aristay_client::application::config::Config;
use aristay_client::application::interfaces::task::TaskService;
use aristay_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    // Base URL and preferences file come from the environment
    let config = Config::new();
    info!("Using API at {}", config.rest_api.base_url);

    let client = Client::from_config(config)?;

    // Walk every page, following the server's next link
    let mut page = client.list_tasks(None).await?;
    loop {
        for task in &page.results {
            info!("#{} [{}] {}", task.id, task.status, task.title);
        }
        match page.next.take() {
            Some(next) => page = client.list_tasks(Some(&next)).await?,
            None => break,
        }
    }

    Ok(())
}
