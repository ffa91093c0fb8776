use crate::coerce::{bson_is_truthy, bson_text};
use mongodb::bson::Bson;
use serde::{Deserialize, Deserializer, Serialize};

/// `employmentStatus` value of employees currently on staff.
pub const ACTIVE_STATUS: &str = "ACTIVE";

/// Employee document as stored in the directory collection.
///
/// Records are owned by other systems and are only read here, so fields
/// are kept as raw BSON and interpreted at match time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    #[serde(rename = "_id", deserialize_with = "id_as_string", default)]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<Bson>,
    #[serde(default)]
    pub last_name: Option<Bson>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub date_of_birth: Option<Bson>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub hire_date: Option<Bson>,
    #[serde(default)]
    pub employment_status: Option<String>,
}

impl EmployeeRecord {
    /// `"Last, First"`, or `None` when either name is missing or empty.
    pub fn display_name(&self) -> Option<String> {
        let first = self.first_name.as_ref().filter(|v| bson_is_truthy(v))?;
        let last = self.last_name.as_ref().filter(|v| bson_is_truthy(v))?;
        Some(format!("{}, {}", bson_text(last), bson_text(first)))
    }
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Bson::deserialize(deserializer)? {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    })
}
