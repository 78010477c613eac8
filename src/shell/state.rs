use crate::modules::employees::use_cases::get_employee_by_id::handler::GetEmployeeByIdHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_employee_by_id: Arc<GetEmployeeByIdHandler>,
}
