use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use employee_roster::config::ServerConfig;
use employee_roster::db::EmployeeStore;
use employee_roster::routes;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = ServerConfig::from_env()?;

    let store = EmployeeStore::open(&config.data_path, config.seed_path.as_deref())
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;
    let store = web::Data::new(store);

    info!("Starting server at {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(routes::cors())
            .app_data(store.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
