use std::{io::Result, net::SocketAddr};

use actix_cors::Cors;
use actix_web::{
    web::{self, resource, scope, Data, ServiceConfig},
    App, HttpResponse, HttpServer,
};

use crate::core::data::ProjectCatalog;

pub async fn start_server(addr: SocketAddr, catalog: ProjectCatalog<'static>) -> Result<()> {
    let server = HttpServer::new(move || {
        App::new()
            .configure(|cfg| routes(cfg, catalog))
            .wrap(cors())
    })
    .bind(addr)?;
    tracing::info!(%addr, projects = catalog.len(), "Server started");
    server.run().await
}

pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_header()
        .allow_any_method()
}

pub fn routes(cfg: &mut ServiceConfig, catalog: ProjectCatalog<'static>) {
    cfg.app_data(Data::new(catalog)).service(
        scope("/v1")
            .service(resource("/projects").route(web::get().to(get_handler)))
            .service(resource("/folio").route(web::get().to(status_handler))),
    );
}

async fn get_handler(catalog: Data<ProjectCatalog<'static>>) -> HttpResponse {
    tracing::debug!(projects = catalog.len(), "Serving projects");
    HttpResponse::Ok().json(catalog.all())
}

async fn status_handler() -> HttpResponse {
    HttpResponse::Ok().body("folio is running")
}
