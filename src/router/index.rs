use crate::advertisement::controller::{
    create_advertisement, delete_advertisement, get_advertisement, get_advertisements,
    update_advertisement,
};
use crate::advertisement::index::advertisement_routes;
use crate::post::post_controller::{get_post, get_posts};
use crate::post::post_index::post_routes;
use crate::utils::helpers::service_name;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

#[get("/")]
async fn welcome() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Welcome to the Neighbourly API",
        "httpStatusCode": StatusCode::OK.as_u16(),
        "service": service_name(),
    }))
}

/// One route per function, as the dashboard calls them. The id may come from
/// the path or from `?id=`.
pub fn function_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/createadvertisement", web::post().to(create_advertisement))
            .route("/getadvertisements", web::get().to(get_advertisements))
            .route("/getadvertisement", web::get().to(get_advertisement))
            .route("/getadvertisement/{id}", web::get().to(get_advertisement))
            .route("/updateadvertisement", web::put().to(update_advertisement))
            .route("/updateadvertisement/{id}", web::put().to(update_advertisement))
            .route("/deleteadvertisement", web::delete().to(delete_advertisement))
            .route("/deleteadvertisement/{id}", web::delete().to(delete_advertisement))
            .route("/getposts", web::get().to(get_posts))
            .route("/getpost", web::get().to(get_post))
            .route("/getpost/{id}", web::get().to(get_post)),
    );
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(advertisement_routes);
    cfg.configure(post_routes);
    cfg.configure(function_routes);
    cfg.service(welcome);
}
