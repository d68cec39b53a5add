use serde::Deserialize;

/// The fields of a NeoWs object that the screen displays.
///
/// Everything else in the payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AsteroidRecord {
    pub name: String,
    #[serde(rename = "nasa_jpl_url")]
    pub jpl_url: String,
    #[serde(rename = "is_potentially_hazardous_asteroid")]
    pub hazardous: bool,
}

impl AsteroidRecord {
    pub fn hazard_label(&self) -> &'static str {
        if self.hazardous {
            "Yes"
        } else {
            "No"
        }
    }

    /// Text rows shown for a loaded record, in display order.
    pub fn display_lines(&self) -> [String; 3] {
        [
            format!("Name: {}", self.name),
            format!("NASA JPL URL: {}", self.jpl_url),
            format!("Is Potentially Hazardous Asteroid: {}", self.hazard_label()),
        ]
    }
}

/// One page of the `/neo/browse` listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BrowsePage {
    pub near_earth_objects: Vec<NeoSummary>,
}

impl BrowsePage {
    /// Identifier of the first listed object, if the page is not empty.
    pub fn first_id(&self) -> Option<&str> {
        self.near_earth_objects.first().map(|neo| neo.id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NeoSummary {
    pub id: String,
}
