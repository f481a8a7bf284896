use axum::Router;
use domain_properties::{handlers, PgPropertyRepository, PropertyService};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgPropertyRepository::new(state.db.clone());
    let service = PropertyService::new(repository);
    handlers::router(service)
}
