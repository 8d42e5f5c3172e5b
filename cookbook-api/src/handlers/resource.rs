//! The five CRUD operations, written once for every resource
//!
//! Each operation runs Validate (writes only) → Invoke service → Respond.
//! Nothing here inspects a draft beyond decoding it, and nothing here
//! invents an error: failures come from [`StrictJson`], from identifier
//! parsing, or from the service.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::error::{ApiError, ApiOperation};
use super::response::StatusMessage;
use super::validation::StrictJson;
use crate::models::Resource;
use crate::service::{ResourceService, ServiceError};

/// Routes for one resource, bound to its service
///
/// | Method | Path | Operation |
/// |---|---|---|
/// | GET | `R::PATH` | [`list`] |
/// | POST | `R::PATH` | [`create`] |
/// | GET | `R::PATH/{id}` | [`get_by_id`] |
/// | PUT | `R::PATH/{id}` | [`update`] |
/// | DELETE | `R::PATH/{id}` | [`delete`] |
pub fn resource_routes<R, S>(service: Arc<S>) -> Router
where
    R: Resource,
    S: ResourceService<R>,
{
    let item_path = format!("{}/{{id}}", R::PATH);

    Router::new()
        .route(R::PATH, get(list::<R, S>).post(create::<R, S>))
        .route(
            &item_path,
            get(get_by_id::<R, S>)
                .put(update::<R, S>)
                .delete(delete::<R, S>),
        )
        .with_state(service)
}

/// `GET /{resource}`: the whole collection as a JSON array
pub async fn list<R, S>(State(service): State<Arc<S>>) -> Result<Json<Vec<R::View>>, ApiError>
where
    R: Resource,
    S: ResourceService<R>,
{
    let items = service
        .get_all()
        .await
        .map_err(service_error::<R>(ApiOperation::List))?;
    tracing::debug!(resource = R::NAME, count = items.len(), "Listed collection");
    Ok(Json(items))
}

/// `GET /{resource}/{id}`: a single item as a JSON object
pub async fn get_by_id<R, S>(
    State(service): State<Arc<S>>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<R::View>, ApiError>
where
    R: Resource,
    S: ResourceService<R>,
{
    let id = identifier::<R>(ApiOperation::Get, raw_id)?;
    let item = service
        .get(id)
        .await
        .map_err(service_error::<R>(ApiOperation::Get))?;
    Ok(Json(item))
}

/// `POST /{resource}`
pub async fn create<R, S>(
    State(service): State<Arc<S>>,
    StrictJson(draft): StrictJson<R::Draft>,
) -> Result<StatusMessage, ApiError>
where
    R: Resource,
    S: ResourceService<R>,
{
    service
        .create(draft)
        .await
        .map_err(service_error::<R>(ApiOperation::Create))?;
    tracing::info!(resource = R::NAME, "Created item");
    Ok(StatusMessage::success())
}

/// `PUT /{resource}/{id}`
///
/// The body is validated before the identifier is looked at, so a bad
/// content type wins over a bad identifier.
pub async fn update<R, S>(
    State(service): State<Arc<S>>,
    raw_id: Result<Path<String>, PathRejection>,
    StrictJson(draft): StrictJson<R::Draft>,
) -> Result<StatusMessage, ApiError>
where
    R: Resource,
    S: ResourceService<R>,
{
    let id = identifier::<R>(ApiOperation::Update, raw_id)?;
    service
        .update(id, draft)
        .await
        .map_err(service_error::<R>(ApiOperation::Update))?;
    tracing::info!(resource = R::NAME, id, "Updated item");
    Ok(StatusMessage::success())
}

/// `DELETE /{resource}/{id}`: 200 with an empty body
pub async fn delete<R, S>(
    State(service): State<Arc<S>>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    R: Resource,
    S: ResourceService<R>,
{
    let id = identifier::<R>(ApiOperation::Delete, raw_id)?;
    service
        .delete(id)
        .await
        .map_err(service_error::<R>(ApiOperation::Delete))?;
    tracing::info!(resource = R::NAME, id, "Deleted item");
    Ok(StatusCode::OK)
}

/// Identifier from the `{id}` segment; undecodable segments are invalid too
fn identifier<R: Resource>(
    operation: ApiOperation,
    raw: Result<Path<String>, PathRejection>,
) -> Result<i64, ApiError> {
    let Path(raw) = raw.map_err(|rejection| {
        ApiError::unreadable_identifier(operation, &rejection).with_resource(R::NAME)
    })?;
    parse_identifier::<R>(operation, &raw)
}

/// Base-10 `i64` from a path segment
fn parse_identifier<R: Resource>(operation: ApiOperation, raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|err| ApiError::invalid_identifier(operation, raw, &err).with_resource(R::NAME))
}

fn service_error<R: Resource>(operation: ApiOperation) -> impl FnOnce(ServiceError) -> ApiError {
    move |err| {
        ApiError::from(err)
            .with_operation(operation)
            .with_resource(R::NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::ApiErrorKind;
    use crate::models::Meal;

    #[test]
    fn test_parse_identifier_accepts_signed_integers() {
        assert_eq!(parse_identifier::<Meal>(ApiOperation::Get, "42").unwrap(), 42);
        assert_eq!(parse_identifier::<Meal>(ApiOperation::Get, "-7").unwrap(), -7);
        assert_eq!(
            parse_identifier::<Meal>(ApiOperation::Get, "9223372036854775807").unwrap(),
            i64::MAX
        );
    }

    #[test]
    fn test_parse_identifier_rejects_non_integers() {
        for raw in ["abc", "1.5", "", "0x10", "9223372036854775808", " 1"] {
            let err = parse_identifier::<Meal>(ApiOperation::Delete, raw).unwrap_err();
            assert_eq!(err.kind, ApiErrorKind::InvalidIdentifier);
            assert_eq!(err.operation, ApiOperation::Delete);
            assert_eq!(err.resource, Some("meal"));
        }
    }

    #[test]
    fn test_service_error_adds_context() {
        let err = service_error::<Meal>(ApiOperation::Update)(ServiceError::conflict("in use"));
        assert_eq!(err.kind, ApiErrorKind::Conflict);
        assert_eq!(err.operation, ApiOperation::Update);
        assert_eq!(err.resource, Some("meal"));
        assert_eq!(err.message, "in use");
    }
}
