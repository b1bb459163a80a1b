//! Built-in sample roster shown on first start.

use crate::model::employee::Employee;
use crate::model::id::EmployeeId;
use chrono::NaiveDate;

/// Returns the two seed records, ids `"1"` and `"2"`.
pub fn sample_roster() -> Vec<Employee> {
    vec![
        Employee {
            id: EmployeeId::from("1"),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@company.com".to_string(),
            position: "Software Engineer".to_string(),
            department: "Engineering".to_string(),
            salary: 85_000.0,
            hire_date: date(2023, 1, 15),
            phone: "+1 (555) 123-4567".to_string(),
        },
        Employee {
            id: EmployeeId::from("2"),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane.smith@company.com".to_string(),
            position: "Product Manager".to_string(),
            department: "Product".to_string(),
            salary: 95_000.0,
            hire_date: date(2022, 8, 20),
            phone: "+1 (555) 234-5678".to_string(),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
