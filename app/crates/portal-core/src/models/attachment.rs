use serde::{Deserialize, Serialize};

/// Link to an uploaded file. Uploads themselves happen outside the portal core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub url: String,
}
