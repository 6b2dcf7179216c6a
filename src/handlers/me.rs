//! Current-subject endpoint behind bearer authentication.
//! Used by: server.

use axum::Json;

use crate::auth::AuthenticatedSubject;
use crate::handlers::verify::SubjectResponse;

pub async fn me(AuthenticatedSubject(sub): AuthenticatedSubject) -> Json<SubjectResponse> {
    Json(SubjectResponse { sub })
}
