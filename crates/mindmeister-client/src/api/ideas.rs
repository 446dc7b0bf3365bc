/*
[INPUT]:  Map and idea identifiers, titles and idea attribute changes
[OUTPUT]: Idea payloads
[POS]:    API layer - ideas scope
[UPDATE]: When ideas endpoints change
*/

use crate::http::{MindMeisterClient, Result};
use crate::types::{Params, Payload};

use super::maps::map_params;

impl MindMeisterClient {
    /// mm.ideas.insert adds a child idea below `parent_id`
    pub async fn ideas_insert(&self, map_id: i64, parent_id: i64, title: &str) -> Result<Payload> {
        let params = map_params(map_id)
            .with("parent_id", parent_id)
            .with("title", title);
        self.call("ideas_insert", params).await
    }

    /// mm.ideas.change updates idea attributes such as `title` or `note`
    pub async fn ideas_change(&self, map_id: i64, idea_id: i64, changes: Params) -> Result<Payload> {
        let mut params = idea_params(map_id, idea_id);
        params.merge(changes);
        self.call("ideas_change", params).await
    }

    /// mm.ideas.delete
    pub async fn ideas_delete(&self, map_id: i64, idea_id: i64) -> Result<Payload> {
        self.call("ideas_delete", idea_params(map_id, idea_id)).await
    }

    /// mm.ideas.move
    pub async fn ideas_move(
        &self,
        map_id: i64,
        idea_id: i64,
        parent_id: i64,
        rank: i64,
    ) -> Result<Payload> {
        let params = idea_params(map_id, idea_id)
            .with("parent_id", parent_id)
            .with("rank", rank);
        self.call("ideas_move", params).await
    }

    /// mm.ideas.toggleClosed
    pub async fn ideas_toggle_closed(&self, map_id: i64, idea_id: i64) -> Result<Payload> {
        self.call("ideas_toggle_closed", idea_params(map_id, idea_id))
            .await
    }
}

fn idea_params(map_id: i64, idea_id: i64) -> Params {
    map_params(map_id).with("idea_id", idea_id)
}
