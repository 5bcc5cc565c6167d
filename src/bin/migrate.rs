use remodel_storefront_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url, &config.pool).await?;
    run_migrations(&orm).await?;
    tracing::info!("migrations applied");
    Ok(())
}
