use rocket::{config::Config as RocketCfg, Rocket, Route};

use snowmap_core::gateways::link_resolver::LinkResolverGateway;

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;


pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    version: &'static str,
}

pub(crate) struct Gateways {
    link_resolver: Box<dyn LinkResolverGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;
    let Gateways { link_resolver } = gateways;

    let jwt_state = jwt::JwtState::new();

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let link_resolver = guards::LinkResolver(link_resolver);
    let version = guards::Version(version);

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(link_resolver)
        .manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    link_resolver: Box<dyn LinkResolverGateway + Send + Sync>,
    version: &'static str,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        version,
    };
    let gateways = Gateways { link_resolver };

    let instance = rocket_instance(options, db, gateways);
    let instance = if enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        };
        instance.attach(cors)
    } else {
        instance
    };
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
    }
}
