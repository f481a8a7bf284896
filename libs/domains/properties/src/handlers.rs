use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    extract_ip_from_headers, extract_user_agent, AuditEvent, AuditOutcome, IdPath, ValidatedJson,
    ValidatedQuery,
};
use observability::PropertyMetrics;
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{PropertyError, PropertyResult};
use crate::models::{CreateProperty, Property, PropertySearch, UpdateProperty};
use crate::repository::PropertyRepository;
use crate::service::PropertyService;
use crate::TAG;

/// OpenAPI documentation for Properties API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_properties,
        search_properties,
        create_property,
        get_property,
        update_property,
        delete_property,
    ),
    components(
        schemas(Property, CreateProperty, UpdateProperty),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Real-estate property listings")
    )
)]
pub struct ApiDoc;

/// Create the property router with all HTTP endpoints
pub fn router<R: PropertyRepository + 'static>(service: PropertyService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_properties).post(create_property))
        .route("/search", get(search_properties))
        .route(
            "/{id}",
            get(get_property).put(update_property).delete(delete_property),
        )
        .with_state(shared_service)
}

fn audit(action: &str, id: i64, outcome: AuditOutcome, headers: &HeaderMap) -> AuditEvent {
    AuditEvent::new(action, Some(format!("property:{}", id)), outcome)
        .with_ip(extract_ip_from_headers(headers))
        .with_user_agent(extract_user_agent(headers))
}

/// List all properties
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All properties ordered by id", body = Vec<Property>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_properties<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
) -> PropertyResult<Json<Vec<Property>>> {
    let properties = service.get_all_properties().await?;
    Ok(Json(properties))
}

/// Search by address fragment and price/size ranges
#[utoipa::path(
    get,
    path = "/search",
    tag = TAG,
    params(PropertySearch),
    responses(
        (status = 200, description = "Matching properties ordered by id", body = Vec<Property>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_properties<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    ValidatedQuery(search): ValidatedQuery<PropertySearch>,
) -> PropertyResult<Json<Vec<Property>>> {
    let properties = service.search_properties(search).await?;
    PropertyMetrics::record_search(properties.len());
    Ok(Json(properties))
}

/// Create a new property
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProperty,
    responses(
        (status = 200, description = "Property created with its assigned id", body = Property),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_property<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateProperty>,
) -> PropertyResult<Json<Property>> {
    let property = service.create_property(input).await?;

    PropertyMetrics::record_created();
    audit("property.create", property.id, AuditOutcome::Success, &headers)
        .with_details(json!({
            "address": property.address,
            "price": property.price,
            "size": property.size,
        }))
        .log();

    Ok(Json(property))
}

/// Get a property by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Property found", body = Property),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_property<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    IdPath(id): IdPath,
) -> PropertyResult<Json<Property>> {
    match service.get_property_by_id(id).await? {
        Some(property) => Ok(Json(property)),
        None => {
            PropertyMetrics::record_not_found("get");
            Err(PropertyError::NotFound(id))
        }
    }
}

/// Replace every field of a property
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Property ID")
    ),
    request_body = UpdateProperty,
    responses(
        (status = 200, description = "Property updated", body = Property),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_property<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProperty>,
) -> PropertyResult<Json<Property>> {
    let property = match service.update_property(id, input).await {
        Ok(property) => property,
        Err(e @ PropertyError::NotFound(_)) => {
            PropertyMetrics::record_not_found("update");
            audit("property.update", id, AuditOutcome::Failure, &headers).log();
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    PropertyMetrics::record_updated();
    audit("property.update", id, AuditOutcome::Success, &headers)
        .with_details(json!({ "price": property.price, "size": property.size }))
        .log();

    Ok(Json(property))
}

/// Delete a property
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Property deleted, empty body"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_property<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
) -> PropertyResult<StatusCode> {
    if let Err(e) = service.delete_property(id).await {
        if matches!(e, PropertyError::NotFound(_)) {
            PropertyMetrics::record_not_found("delete");
            audit("property.delete", id, AuditOutcome::Failure, &headers).log();
        }
        return Err(e);
    }

    PropertyMetrics::record_deleted();
    audit("property.delete", id, AuditOutcome::Success, &headers).log();

    Ok(StatusCode::OK)
}
