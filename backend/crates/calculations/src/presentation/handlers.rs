//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::{AppJson, AppPath, AppQuery};
use kernel::id::CalculationId;
use std::sync::Arc;

use crate::application::config::CalculationsConfig;
use crate::application::{
    CreateCalculationInput, CreateCalculationUseCase, DeleteCalculationUseCase,
    GetCalculationUseCase, ListCalculationsInput, ListCalculationsUseCase,
    UpdateCalculationUseCase,
};
use crate::domain::repository::CalculationStore;
use crate::error::CalculationResult;
use crate::presentation::dto::{
    CalculationResponse, CreateCalculationRequest, ListQuery, UpdateCalculationRequest,
};

/// Shared state for calculation handlers
#[derive(Clone)]
pub struct CalculationsAppState<S>
where
    S: CalculationStore,
{
    pub store: Arc<S>,
    pub config: Arc<CalculationsConfig>,
}

/// GET /calculations
pub async fn list_calculations<S>(
    State(state): State<CalculationsAppState<S>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> CalculationResult<Json<Vec<CalculationResponse>>>
where
    S: CalculationStore,
{
    let use_case = ListCalculationsUseCase::new(state.store.clone(), state.config.clone());

    let rows = use_case
        .execute(ListCalculationsInput {
            skip: query.skip,
            limit: query.limit,
        })
        .await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// POST /calculations
pub async fn create_calculation<S>(
    State(state): State<CalculationsAppState<S>>,
    AppJson(req): AppJson<CreateCalculationRequest>,
) -> CalculationResult<(StatusCode, Json<CalculationResponse>)>
where
    S: CalculationStore,
{
    let use_case = CreateCalculationUseCase::new(state.store.clone());

    let calculation = use_case
        .execute(CreateCalculationInput {
            a: req.a,
            b: req.b,
            operation: req.operation,
            user_id: req.user_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(calculation.into())))
}

/// GET /calculations/{id}
pub async fn get_calculation<S>(
    State(state): State<CalculationsAppState<S>>,
    AppPath(id): AppPath<i64>,
) -> CalculationResult<Json<CalculationResponse>>
where
    S: CalculationStore,
{
    let use_case = GetCalculationUseCase::new(state.store.clone());
    let calculation = use_case.execute(CalculationId::from_i64(id)).await?;

    Ok(Json(calculation.into()))
}

/// PUT /calculations/{id}
pub async fn update_calculation<S>(
    State(state): State<CalculationsAppState<S>>,
    AppPath(id): AppPath<i64>,
    AppJson(req): AppJson<UpdateCalculationRequest>,
) -> CalculationResult<Json<CalculationResponse>>
where
    S: CalculationStore,
{
    let use_case = UpdateCalculationUseCase::new(state.store.clone());
    let calculation = use_case
        .execute(CalculationId::from_i64(id), req.into())
        .await?;

    Ok(Json(calculation.into()))
}

/// DELETE /calculations/{id}
pub async fn delete_calculation<S>(
    State(state): State<CalculationsAppState<S>>,
    AppPath(id): AppPath<i64>,
) -> CalculationResult<StatusCode>
where
    S: CalculationStore,
{
    let use_case = DeleteCalculationUseCase::new(state.store.clone());
    use_case.execute(CalculationId::from_i64(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
