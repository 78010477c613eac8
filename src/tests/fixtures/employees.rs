use crate::modules::employees::core::entities::{Department, Employee};

pub fn make_employee(id: i64, name: &str, department_id: i64, department_name: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        department: Department {
            id: department_id,
            name: department_name.to_string(),
        },
    }
}

pub fn make_ada() -> Employee {
    make_employee(11, "Ada", 1, "Engineering")
}
