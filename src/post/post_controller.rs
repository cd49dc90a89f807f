use crate::post::post_service::PostService;
use crate::utils::document::parse_identifier;
use crate::utils::error::CustomError;
use crate::utils::helpers::{IdQuery, requested_id};
use actix_web::{HttpRequest, HttpResponse, web};

pub async fn get_posts(post_service: web::Data<PostService>) -> Result<HttpResponse, CustomError> {
    let posts = post_service.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

pub async fn get_post(
    req: HttpRequest,
    query: web::Query<IdQuery>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post_id = parse_identifier(requested_id(&req, &query))?;

    let post = post_service.get_post(post_id).await?;
    Ok(HttpResponse::Ok().json(post))
}
