//! Demo command - runs a sample account workflow end to end

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::UpdateUserRequest;
use crate::infrastructure::logging;
use crate::infrastructure::CreateUserRequest;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Export the accounts to this JSON file before the deletion step
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Run the demo workflow
pub async fn run(args: DemoArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging)?;

    let (service, worker) = crate::create_user_service(&config);

    for request in [
        CreateUserRequest::new("john_doe", "john@example.com").with_password("SecurePass123"),
        CreateUserRequest::new("jane_smith", "jane@example.com").with_password("StrongPass456"),
    ] {
        match service.create(request).await {
            Ok(view) => println!("Created: {}", serde_json::to_string(&view)?),
            Err(e) => println!("Error creating user: {}", e),
        }
    }

    let users = service.list().await?;
    println!("Total users: {}", users.len());

    match service
        .update(
            "john_doe",
            UpdateUserRequest::new().with_email("john.doe@newdomain.com"),
        )
        .await
    {
        Ok(view) => println!("Updated: {}", serde_json::to_string(&view)?),
        Err(e) => println!("Error updating user: {}", e),
    }

    if let Some(path) = args.export {
        let destination = path.to_string_lossy();
        if service.export_users(&destination).await {
            println!("Exported users to {}", destination);
        } else {
            println!("Export to {} failed", destination);
        }
    }

    match service.delete("jane_smith").await {
        Ok(_) => println!("User deleted successfully"),
        Err(e) => println!("Error deleting user: {}", e),
    }

    let entries = service.audit_entries().await;
    println!("Total log entries: {}", entries.len());
    println!("{}", serde_json::to_string_pretty(&entries)?);

    drop(service);
    if let Some(worker) = worker {
        worker.await?;
    }

    info!("Demo complete");
    Ok(())
}
