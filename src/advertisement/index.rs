use super::controller::{
    create_advertisement, delete_advertisement, get_advertisement, get_advertisements,
    update_advertisement,
};
use actix_web::web;

pub fn advertisement_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/advertisements")
            .route("", web::post().to(create_advertisement))
            .route("", web::get().to(get_advertisements))
            .route("", web::put().to(update_advertisement))
            .route("", web::delete().to(delete_advertisement))
            .route("/", web::get().to(get_advertisement))
            .route("/", web::put().to(update_advertisement))
            .route("/", web::delete().to(delete_advertisement))
            .route("/{id}", web::get().to(get_advertisement))
            .route("/{id}", web::put().to(update_advertisement))
            .route("/{id}", web::delete().to(delete_advertisement)),
    );
}
