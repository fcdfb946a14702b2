use actix_web::{web, HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::{
    config::AppConfig,
    errors::ServiceError,
    models::{
        search::{SearchParams, SearchQuery},
        search_response::RatingResponse,
    },
    services::{
        catalog::PropertyCatalog,
        rating_service::{RatingLabel, RatingTier},
        search_service,
    },
};

/*
    GET /api/search?location=..&priceRange={"min":..,"max":..}&amenities=a,b&amenities=c&sortBy=price&page=1&limit=10
*/
pub async fn search_get(
    catalog: web::Data<Arc<PropertyCatalog>>,
    config: web::Data<AppConfig>,
    req: HttpRequest,
) -> Result<HttpResponse, ServiceError> {
    let query = SearchQuery::from_query_string(req.query_string())?;
    let params = SearchParams::try_from(query)?;
    Ok(HttpResponse::Ok().json(search_service::search(
        catalog.all(),
        &params,
        config.page_size,
    )))
}

/*
    POST /api/search with SearchParams as the JSON body
*/
pub async fn search_post(
    catalog: web::Data<Arc<PropertyCatalog>>,
    config: web::Data<AppConfig>,
    params: web::Json<SearchParams>,
) -> HttpResponse {
    HttpResponse::Ok().json(search_service::search(
        catalog.all(),
        &params,
        config.page_size,
    ))
}

/*
    GET /api/ratings/{rating}
*/
pub async fn rating_label(path: web::Path<f64>) -> Result<HttpResponse, ServiceError> {
    let rating = path.into_inner();
    if !(0.0..=10.0).contains(&rating) {
        return Err(ServiceError::ValidationFailed(
            "rating must be between 0 and 10".to_string(),
        ));
    }

    Ok(HttpResponse::Ok().json(RatingResponse {
        rating,
        label: RatingLabel::from_rating(rating).as_str().to_string(),
        tier: RatingTier::from_rating(rating).as_str().to_string(),
    }))
}
