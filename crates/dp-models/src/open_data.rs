//! CKAN open-data portal response models (`package_show`, `datastore_search`)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `package_show` response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageShowResponse {
    /// Whether the API call succeeded
    pub success: bool,

    /// Package metadata
    pub result: Package,
}

/// Package metadata: the piece we consume is the resource list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Package id
    #[serde(default)]
    pub id: Option<String>,

    /// Human-readable package name
    #[serde(default)]
    pub name: Option<String>,

    /// Datasets exposed by this package
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// A dataset resource within a package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource id, used as the `datastore_search` key
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Only resources with this flag set can be queried through the
    /// datastore_search endpoint
    #[serde(default)]
    pub datastore_active: bool,
}

/// `datastore_search` response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatastoreSearchResponse {
    /// Whether the API call succeeded
    pub success: bool,

    /// Paged search result; empty when the call reports failure
    #[serde(default)]
    pub result: DatastoreResult,
}

/// One page of datastore records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatastoreResult {
    /// Server-reported total record count for the resource
    #[serde(default)]
    pub total: i64,

    /// Records in this page
    #[serde(default)]
    pub records: Vec<DelayRecord>,
}

/// Raw TTC delay record as served by the datastore.
///
/// Field values are loosely typed upstream (numbers arrive as numbers or as
/// strings depending on the vintage of the resource), so the coercible fields
/// stay as `serde_json::Value` here and are narrowed in the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayRecord {
    /// Upstream row id
    #[serde(rename = "_id", default)]
    pub id: Option<Value>,

    /// Day-of-week label
    #[serde(rename = "Day", default)]
    pub day: Option<String>,

    /// ISO-8601 date string
    #[serde(rename = "Date", default)]
    pub date: Option<String>,

    /// Time-of-day string ("08:30")
    #[serde(rename = "Time", default)]
    pub time: Option<String>,

    /// Direction of travel
    #[serde(rename = "Bound", default)]
    pub bound: Option<String>,

    /// Route number, string or integer upstream
    #[serde(rename = "Route", default)]
    pub route: Option<Value>,

    /// Minimum gap in minutes
    #[serde(rename = "Min Gap", default)]
    pub min_gap: Option<Value>,

    /// Station or stop description
    #[serde(rename = "Station", default)]
    pub station: Option<String>,

    /// Vehicle number, string or integer upstream
    #[serde(rename = "Vehicle", default)]
    pub vehicle: Option<Value>,

    /// Incident description
    #[serde(rename = "Incident", default)]
    pub incident: Option<String>,

    /// Minimum delay in minutes
    #[serde(rename = "Min Delay", default)]
    pub min_delay: Option<Value>,
}
