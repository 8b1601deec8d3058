//! Application router configuration.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::json;

use crate::{
    AppState, Category, Company, Subscription, User, endpoints,
    record::Record,
    routes::{create_record, delete_record, get_record, list_records, update_record},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(record_routes::<Company>(
            endpoints::COMPANIES,
            endpoints::COMPANY,
        ))
        .merge(record_routes::<User>(endpoints::USERS, endpoints::USER))
        .merge(record_routes::<Category>(
            endpoints::CATEGORIES,
            endpoints::CATEGORY,
        ))
        .merge(record_routes::<Subscription>(
            endpoints::SUBSCRIPTIONS,
            endpoints::SUBSCRIPTION,
        ))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The create/list/get/update/delete routes for one record type.
fn record_routes<R>(collection_path: &str, record_path: &str) -> Router<AppState>
where
    R: Record + Serialize + Send + Sync + 'static,
    R::Draft: DeserializeOwned + Send + 'static,
    R::Patch: DeserializeOwned + Send + 'static,
{
    Router::new()
        .route(
            collection_path,
            post(create_record::<R>).get(list_records::<R>),
        )
        .route(
            record_path,
            get(get_record::<R>)
                .put(update_record::<R>)
                .delete(delete_record::<R>),
        )
}

/// Respond with a JSON 404 for unknown routes.
async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": "Not Found" })),
    )
        .into_response()
}
