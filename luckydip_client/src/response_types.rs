/// One archival record picked at random by the lucky-dip endpoint.
///
/// Each record is transient: fetched, displayed once, and discarded on the
/// next roll. Optional fields may also arrive as empty strings; the viewer
/// treats those the same as absent.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct RandomRecord {
    /// The search term that was used to select the record.
    pub query: String,
    /// The title of the record, if the catalogue has one.
    pub title: Option<String>,
    /// The institution holding the record.
    #[serde(rename = "heldBy")]
    pub held_by: Option<String>,
    /// The catalogue description of the record.
    pub description: Option<String>,
    /// Where the record can be viewed online.
    pub url: String,
}
