//! Route handlers shared by every record type.
//!
//! Each handler checks the database connection out of [AppState] for the
//! duration of the request, delegates to the persistence functions in
//! [crate::store], and translates the outcome into an HTTP response. The
//! connection is released when the handler returns, on every path.

use std::sync::MutexGuard;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    AppState, Error,
    record::{DatabaseID, Record},
    store,
};

/// Check out the database connection for the duration of one request.
fn lock_connection(state: &AppState) -> Result<MutexGuard<'_, Connection>, Error> {
    state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })
}

/// Handle record creation. Responds with 201 and the persisted record,
/// including its store-assigned ID.
pub async fn create_record<R>(
    State(state): State<AppState>,
    Json(draft): Json<R::Draft>,
) -> Result<Response, Error>
where
    R: Record + Serialize,
    R::Draft: DeserializeOwned,
{
    let connection = lock_connection(&state)?;
    let record: R = store::create(&draft, &connection)?;

    tracing::info!("created {} {}", R::TABLE, record.id());

    Ok((StatusCode::CREATED, Json(record)).into_response())
}

/// Handle listing every record of a type. An empty table responds with 200
/// and an empty array.
pub async fn list_records<R>(State(state): State<AppState>) -> Result<Response, Error>
where
    R: Record + Serialize,
{
    let connection = lock_connection(&state)?;
    let records: Vec<R> = store::get_all(&connection)?;

    Ok(Json(records).into_response())
}

/// Handle fetching a single record by its ID. Responds with 404 if no record
/// matches.
pub async fn get_record<R>(
    State(state): State<AppState>,
    Path(id): Path<DatabaseID>,
) -> Result<Response, Error>
where
    R: Record + Serialize,
{
    let connection = lock_connection(&state)?;
    let record: R = store::get(id, &connection)?;

    Ok(Json(record).into_response())
}

/// Handle a partial update. Fields omitted from the payload keep their
/// stored values, and a payload with no fields returns the record unchanged.
pub async fn update_record<R>(
    State(state): State<AppState>,
    Path(id): Path<DatabaseID>,
    Json(patch): Json<R::Patch>,
) -> Result<Response, Error>
where
    R: Record + Serialize,
    R::Patch: DeserializeOwned,
{
    let mut connection = lock_connection(&state)?;
    let record: R = store::update(id, &patch, &mut connection)?;

    tracing::info!("updated {} {id}", R::TABLE);

    Ok(Json(record).into_response())
}

/// Handle record deletion. Responds with 204 on success and 404 if the
/// record does not exist.
pub async fn delete_record<R>(
    State(state): State<AppState>,
    Path(id): Path<DatabaseID>,
) -> Result<Response, Error>
where
    R: Record,
{
    let connection = lock_connection(&state)?;
    store::delete::<R>(id, &connection)?;

    tracing::info!("deleted {} {id}", R::TABLE);

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[cfg(test)]
mod route_tests {
    use axum::{
        Json,
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use rusqlite::Connection;

    use crate::{AppState, Company, CompanyPatch, NewCompany};

    use super::{create_record, delete_record, get_record, list_records, update_record};

    fn get_test_state() -> AppState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");

        AppState::new(connection).expect("Could not create app state")
    }

    fn acme() -> NewCompany {
        NewCompany {
            name: "Acme Inc.".to_owned(),
            url: Some("https://acme.com".to_owned()),
        }
    }

    #[tokio::test]
    async fn create_record_responds_with_201() {
        let state = get_test_state();

        let response = create_record::<Company>(State(state), Json(acme()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn list_records_responds_with_200_on_an_empty_table() {
        let state = get_test_state();

        let response = list_records::<Company>(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn get_missing_record_responds_with_404() {
        let state = get_test_state();

        let response = get_record::<Company>(State(state), Path(999))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_missing_record_responds_with_404() {
        let state = get_test_state();

        let response =
            update_record::<Company>(State(state), Path(999), Json(CompanyPatch::default()))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_record_responds_with_204_then_404() {
        let state = get_test_state();
        let response = create_record::<Company>(State(state.clone()), Json(acme()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = delete_record::<Company>(State(state.clone()), Path(1))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = delete_record::<Company>(State(state), Path(1))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
