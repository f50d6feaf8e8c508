use actix_web::web;

use crate::api::handlers::{
    crops::{list_crops, plant_crop, remove_crop, water_crop},
    placements::post_validate,
    terrace::{get_terrace, post_clear, post_event, put_dimensions, put_tool},
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(get_terrace)
            .service(put_dimensions)
            .service(put_tool)
            .service(post_event)
            .service(post_clear)
            .service(post_validate)
            .service(list_crops)
            .service(plant_crop)
            .service(water_crop)
            .service(remove_crop),
    );
}
