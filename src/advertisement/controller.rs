use crate::advertisement::model::UpdateAdvertisementResponse;
use crate::advertisement::service::AdvertisementService;
use crate::notifier::EventNotifier;
use crate::utils::document::{parse_fields, parse_identifier};
use crate::utils::error::CustomError;
use crate::utils::helpers::{IdQuery, requested_id};
use actix_web::{HttpRequest, HttpResponse, web};

/// Create an advertisement
/// POST /advertisements
pub async fn create_advertisement(
    advertisement_service: web::Data<AdvertisementService>,
    notifier: web::Data<EventNotifier>,
    body: web::Bytes,
) -> Result<HttpResponse, CustomError> {
    let fields = parse_fields(&body)?;

    let advertisement = advertisement_service.create_advertisement(fields).await?;
    notifier.notify_created(advertisement.clone());

    Ok(HttpResponse::Created().json(advertisement))
}

/// GET /advertisements
pub async fn get_advertisements(
    advertisement_service: web::Data<AdvertisementService>,
) -> Result<HttpResponse, CustomError> {
    let advertisements = advertisement_service.list_advertisements().await?;
    Ok(HttpResponse::Ok().json(advertisements))
}

/// GET /advertisements/{id}
pub async fn get_advertisement(
    req: HttpRequest,
    query: web::Query<IdQuery>,
    advertisement_service: web::Data<AdvertisementService>,
) -> Result<HttpResponse, CustomError> {
    let id = parse_identifier(requested_id(&req, &query))?;

    let advertisement = advertisement_service.get_advertisement(id).await?;
    Ok(HttpResponse::Ok().json(advertisement))
}

/// Merge the body's fields into an advertisement
/// PUT /advertisements/{id}
pub async fn update_advertisement(
    req: HttpRequest,
    query: web::Query<IdQuery>,
    advertisement_service: web::Data<AdvertisementService>,
    body: web::Bytes,
) -> Result<HttpResponse, CustomError> {
    let id = parse_identifier(requested_id(&req, &query))?;
    let fields = parse_fields(&body)?;

    advertisement_service.update_advertisement(id, fields).await?;

    Ok(HttpResponse::Ok().json(UpdateAdvertisementResponse {
        id: id.to_hex(),
        status: "updated",
    }))
}

/// DELETE /advertisements/{id}
pub async fn delete_advertisement(
    req: HttpRequest,
    query: web::Query<IdQuery>,
    advertisement_service: web::Data<AdvertisementService>,
) -> Result<HttpResponse, CustomError> {
    let id = parse_identifier(requested_id(&req, &query))?;

    advertisement_service.delete_advertisement(id).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Deleted"))
}
