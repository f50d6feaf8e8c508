use actix_web::{middleware, web, App, HttpServer};
use terrace::{
    api::{json_config, openapi::ApiDoc, routes, state::AppState},
    config::AppConfig,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr.clone();
    let state = web::Data::new(AppState::new(config).map_err(std::io::Error::other)?);

    log::info!("🌱 Terrace planner API started at http://{bind_addr}");
    log::info!("   GET  /api/terrace");
    log::info!("   PUT  /api/terrace/dimensions | /api/terrace/tool");
    log::info!("   POST /api/terrace/events | /api/terrace/clear");
    log::info!("   POST /api/placements/validate");
    log::info!("   GET|POST /api/crops, POST /api/crops/{{id}}/water, DELETE /api/crops/{{id}}");
    log::info!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .app_data(json_config())
            .configure(routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&bind_addr)?
    .run()
    .await
}
