use folio::{
    core::{data::PROJECTS, settings::Settings},
    error::FolioError,
    server::start_server,
};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), FolioError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load_or_default(Settings::path_from_env()).map_err(|error| {
        tracing::error!(%error, "Settings load error");
        error
    })?;

    start_server(settings.addr(), PROJECTS).await?;
    Ok(())
}
