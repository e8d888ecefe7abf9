use serde::{Deserialize, Serialize};

use super::{Cell, ResultSet};

/// The only structured failure body the backend sends.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `POST /api/query`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NaturalLanguageRequest {
    pub user_request: String,
}

/// Response of `POST /api/query`.
///
/// The backend forwards whichever cube endpoint the request resolved to:
/// aggregate responses carry `cells`, facts responses carry `data`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct NaturalLanguageResponse {
    #[serde(default)]
    pub cells: Vec<Cell>,

    #[serde(default)]
    pub data: Vec<Cell>,
}

impl From<NaturalLanguageResponse> for ResultSet {
    fn from(resp: NaturalLanguageResponse) -> Self {
        let mut cells = resp.cells;
        cells.extend(resp.data);
        ResultSet { cells }
    }
}
