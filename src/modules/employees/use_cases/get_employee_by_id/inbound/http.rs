use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::modules::employees::use_cases::get_employee_by_id::view::EmployeeView;
use crate::shared::core::envelope::RootEntity;
use crate::shared::infrastructure::error_translator::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<RootEntity<EmployeeView>>, ApiError> {
    let Path(id) = id?;
    let view = state.get_employee_by_id.handle(id).await?;
    Ok(Json(RootEntity::ok(view)))
}
