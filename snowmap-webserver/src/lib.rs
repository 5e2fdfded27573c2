#[macro_use]
extern crate log;

use snowmap_core::gateways::link_resolver::LinkResolverGateway;
use snowmap_db_sqlite::Connections;

mod web;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    link_resolver: Box<dyn LinkResolverGateway + Send + Sync>,
    version: &'static str,
) {
    web::run(connections.into(), enable_cors, link_resolver, version).await;
}
