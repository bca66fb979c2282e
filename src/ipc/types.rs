use serde::Deserialize;

use crate::catalog::Catalog;
use crate::schedule::BlockList;
use crate::sections::SectionIndex;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub catalog: Option<Catalog>,
    pub sections: Option<SectionIndex>,
    pub schedule: BlockList,
}
