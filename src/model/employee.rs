use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(example = json!({ "id": "1001", "name": "Jane Doe" }))]
pub struct Employee {
    #[schema(example = "1001")]
    pub id: String,

    #[schema(example = "Jane Doe")]
    pub name: String,
}

/// An employee together with the ids of all of its work entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EmployeeSummary {
    #[schema(example = "1001")]
    pub id: String,

    #[schema(example = "Jane Doe")]
    pub name: String,

    #[schema(example = json!([1, 2, 5]))]
    pub work_entries: Vec<i64>,
}
