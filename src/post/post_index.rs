use super::post_controller::{get_post, get_posts};
use actix_web::web;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .route("", web::get().to(get_posts))
            .route("/", web::get().to(get_post))
            .route("/{id}", web::get().to(get_post)),
    );
}
