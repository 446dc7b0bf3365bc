/*
[INPUT]:  Map identifiers and paging arguments
[OUTPUT]: Map payloads
[POS]:    API layer - maps scope
[UPDATE]: When maps endpoints change
*/

use crate::http::{MindMeisterClient, Result};
use crate::types::{Params, Payload};

impl MindMeisterClient {
    /// mm.maps.getList
    pub async fn maps_get_list(&self, page: Option<u32>, per_page: Option<u32>) -> Result<Payload> {
        let mut params = Params::new();
        if let Some(page) = page {
            params.insert("page", page);
        }
        if let Some(per_page) = per_page {
            params.insert("per_page", per_page);
        }
        self.call("maps_get_list", params).await
    }

    /// mm.maps.getMap
    pub async fn maps_get_map(&self, map_id: i64) -> Result<Payload> {
        self.call("maps_get_map", map_params(map_id)).await
    }

    /// mm.maps.add creates an empty map
    pub async fn maps_add(&self) -> Result<Payload> {
        self.call("maps_add", Params::new()).await
    }

    /// mm.maps.delete
    pub async fn maps_delete(&self, map_id: i64) -> Result<Payload> {
        self.call("maps_delete", map_params(map_id)).await
    }

    /// mm.maps.duplicate
    pub async fn maps_duplicate(&self, map_id: i64) -> Result<Payload> {
        self.call("maps_duplicate", map_params(map_id)).await
    }

    /// mm.maps.newFromTemplate
    pub async fn maps_new_from_template(&self, template_id: i64) -> Result<Payload> {
        self.call(
            "maps_new_from_template",
            Params::new().with("template_id", template_id),
        )
        .await
    }

    /// mm.maps.history
    pub async fn maps_history(&self, map_id: i64) -> Result<Payload> {
        self.call("maps_history", map_params(map_id)).await
    }

    /// mm.maps.undo
    pub async fn maps_undo(&self, map_id: i64) -> Result<Payload> {
        self.call("maps_undo", map_params(map_id)).await
    }

    /// mm.maps.redo
    pub async fn maps_redo(&self, map_id: i64) -> Result<Payload> {
        self.call("maps_redo", map_params(map_id)).await
    }
}

pub(crate) fn map_params(map_id: i64) -> Params {
    Params::new().with("map_id", map_id)
}
