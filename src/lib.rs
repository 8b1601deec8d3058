//! Subtrack is a REST API for tracking subscriptions, the companies that
//! provide them, the users who hold them, and category tags.
//!
//! Every entity exposes the same five operations: create, list, get by ID,
//! partial update, and delete. The four entities are structurally identical,
//! so the persistence layer and the route handlers are written once against
//! the [Record] trait and instantiated per entity by the router.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod category;
mod company;
mod db;
mod endpoints;
mod error;
mod patch;
mod record;
mod routes;
mod routing;
mod store;
mod subscription;
mod user;

pub use app_state::AppState;
pub use category::{Category, CategoryPatch, NewCategory};
pub use company::{Company, CompanyPatch, NewCompany};
pub use db::{drop_tables, initialize as initialize_db};
pub use error::Error;
pub use patch::Patch;
pub use record::{DatabaseID, Record};
pub use routing::build_router;
pub use subscription::{NewSubscription, Price, Subscription, SubscriptionPatch};
pub use user::{NewUser, User, UserPatch};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
