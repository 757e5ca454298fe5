//! Built-in sample data: an incident report's worth of fields.

use super::{Field, TableRow};

fn witness(name: &str, contact: &str, statement: &str) -> TableRow {
    TableRow::from([
        ("Name".to_string(), name.to_string()),
        ("Contact".to_string(), contact.to_string()),
        ("Statement".to_string(), statement.to_string()),
    ])
}

pub(super) fn fields() -> Vec<Field> {
    vec![
        Field::sentinel(),
        Field::scalar("employee_name", "Employee Name", "John Doe"),
        Field::scalar("employee_service", "Length of Service", "5 Years"),
        Field::scalar("supervisor_name", "Supervisor Name", "Jane Smith"),
        Field::scalar("incident_date", "Date of Occurrence", "2024-05-15"),
        Field::scalar("location", "Site / Location", "Refinery Sector A"),
        Field::table(
            "witness_table",
            "Witness Information Table",
            &["Name", "Contact", "Statement"],
            vec![
                witness("Robert Miller", "555-0101", "Heard a loud bang near the valve."),
                witness("Sarah Connor", "555-0102", "Saw steam escaping from the seal."),
            ],
        ),
        Field::list(
            "classification",
            "Incident Classification",
            &["First Aid", "Equipment Damage"],
        ),
        Field::scalar(
            "incident_desc",
            "Incident Description",
            "Minor equipment failure during routine pressure check.",
        ),
        Field::scalar(
            "employee_sig",
            "Employee Digital Signature",
            "John Doe (E-Signed 2024-05-15)",
        ),
        Field::image(
            "incident_photo",
            "Incident Photo",
            "https://images.unsplash.com/photo-1504328345606-18bbc8c9d7d1?auto=format&fit=crop&q=80&w=400",
        ),
    ]
}
