use axum::{
    Json, Router,
    routing::{get, post},
};

use crate::{
    contexts::Persona,
    dto::contexts::{ConditionView, EvaluateRequest, Evaluation},
    error::AppResult,
    extract::AppJson,
    response::{DataResponse, ErrorBody},
    services::context_service,
};

// Stateless, so it can be mounted under any router state.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/personas", get(list_personas))
        .route("/conditions", get(list_conditions))
        .route("/evaluate", post(evaluate))
}

#[utoipa::path(
    get,
    path = "/api/contexts/personas",
    responses(
        (status = 200, description = "Example personas", body = DataResponse<Vec<Persona>>)
    ),
    tag = "Contexts"
)]
pub async fn list_personas() -> Json<DataResponse<Vec<Persona>>> {
    Json(DataResponse::ok(context_service::list_personas()))
}

#[utoipa::path(
    get,
    path = "/api/contexts/conditions",
    responses(
        (status = 200, description = "Condition matrix", body = DataResponse<Vec<ConditionView>>)
    ),
    tag = "Contexts"
)]
pub async fn list_conditions() -> Json<DataResponse<Vec<ConditionView>>> {
    Json(DataResponse::ok(context_service::list_conditions()))
}

#[utoipa::path(
    post,
    path = "/api/contexts/evaluate",
    request_body = EvaluateRequest,
    responses(
        (status = 200, description = "Per-condition results for the selected persona", body = DataResponse<Evaluation>),
        (status = 404, description = "Persona not found", body = ErrorBody)
    ),
    tag = "Contexts"
)]
pub async fn evaluate(
    AppJson(payload): AppJson<EvaluateRequest>,
) -> AppResult<Json<DataResponse<Evaluation>>> {
    let evaluation = context_service::evaluate(payload)?;
    Ok(Json(DataResponse::ok(evaluation)))
}
