use crate::models::Destination;
use axum::Json;

/// Handle destination listing
///
/// GET /api/destinations
///
/// Placeholder data; destination persistence is out of scope for this
/// service, the frontend only needs the route to exist.
pub async fn handle_list_destinations() -> Json<Vec<Destination>> {
    Json(vec![Destination {
        name: "Sample Destination".to_string(),
    }])
}
