use serde::Deserialize;

// A filing's `index.json`: `{ "directory": { "item": [ { "name": ..., ... } ] } }`.
#[derive(Deserialize)]
pub(crate) struct IndexEnvelope {
    pub(crate) directory: Option<DirectoryNode>,
}

#[derive(Deserialize)]
pub(crate) struct DirectoryNode {
    pub(crate) item: Option<Vec<ItemNode>>,
}

#[derive(Deserialize)]
pub(crate) struct ItemNode {
    pub(crate) name: Option<String>,
}
