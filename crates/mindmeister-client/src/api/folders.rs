/*
[INPUT]:  Folder identifiers and names
[OUTPUT]: Folder payloads
[POS]:    API layer - folders scope
[UPDATE]: When folders endpoints change
*/

use crate::http::{MindMeisterClient, Result};
use crate::types::{Params, Payload};

impl MindMeisterClient {
    /// mm.folders.getList
    pub async fn folders_get_list(&self) -> Result<Payload> {
        self.call("folders_get_list", Params::new()).await
    }

    /// mm.folders.add, created at the top level when `parent_id` is `None`
    pub async fn folders_add(&self, name: &str, parent_id: Option<i64>) -> Result<Payload> {
        let mut params = Params::new().with("name", name);
        if let Some(parent_id) = parent_id {
            params.insert("parent_id", parent_id);
        }
        self.call("folders_add", params).await
    }

    /// mm.folders.delete
    pub async fn folders_delete(&self, folder_id: i64) -> Result<Payload> {
        self.call("folders_delete", folder_params(folder_id)).await
    }

    /// mm.folders.rename
    pub async fn folders_rename(&self, folder_id: i64, name: &str) -> Result<Payload> {
        self.call("folders_rename", folder_params(folder_id).with("name", name))
            .await
    }

    /// mm.folders.move
    pub async fn folders_move(&self, folder_id: i64, parent_id: i64) -> Result<Payload> {
        self.call(
            "folders_move",
            folder_params(folder_id).with("parent_id", parent_id),
        )
        .await
    }
}

fn folder_params(folder_id: i64) -> Params {
    Params::new().with("folder_id", folder_id)
}
