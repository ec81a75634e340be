use aristay_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::from_config(Config::new())?;

    let properties = client.list_properties(None).await?;
    let Some(property) = properties.results.first() else {
        info!("No properties found, nothing to do");
        return Ok(());
    };
    info!("Creating a cleaning task on {}", property.name);

    let task = client
        .create_task(
            &NewTask::new(property.id, "Turnover cleaning", TaskType::Cleaning)
                .with_description("Created by the create_task demo"),
        )
        .await?;
    info!("Task created: {}", serde_json::to_string_pretty(&task)?);

    client
        .update_task(task.id, &TaskUpdate::new().with_status(TaskStatus::InProgress))
        .await?;
    info!("✓ Task {} moved to {}", task.id, TaskStatus::InProgress);

    Ok(())
}
