use university_lib::{bootstrap, log_info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let services = bootstrap()?;

    let status = services.unit_of_work().database().pool_status();
    log_info!(
        "Database pool: {} connection(s), {} idle, max {}",
        status.connections,
        status.idle_connections,
        status.max_size
    );

    let faculties = services.faculties.list_faculties().await?;
    log_info!("{} faculties on record", faculties.len());

    Ok(())
}
