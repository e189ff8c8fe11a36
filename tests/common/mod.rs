// common/mod.rs - Shared test utilities
//
// Spins up a throwaway catalog endpoint on an ephemeral port so client and
// server function tests never touch the public API. Must be used from an
// actix runtime (#[actix_web::test]).

#![allow(dead_code)]

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use std::net::TcpListener;
use url::Url;

/// A running mock catalog endpoint
pub struct MockCatalog {
    pub url: Url,
    handle: ServerHandle,
}

impl MockCatalog {
    /// Serve `body` with `status` at `/products`
    pub async fn start(status: StatusCode, body: &'static str) -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;

        let server = HttpServer::new(move || {
            App::new().route(
                "/products",
                web::get().to(move || async move {
                    HttpResponse::build(status)
                        .content_type("application/json")
                        .body(body)
                }),
            )
        })
        .workers(1)
        .listen(listener)?
        .run();

        let handle = server.handle();
        actix_web::rt::spawn(server);

        let url = Url::parse(&format!("http://{}/products", addr))?;
        Ok(Self { url, handle })
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

/// A URL on a local port nothing is listening on
pub fn closed_endpoint() -> anyhow::Result<Url> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(Url::parse(&format!("http://{}/products", addr))?)
}
