/*
[INPUT]:  Parsed subcommands, loaded configuration and token store
[OUTPUT]: API payloads printed as JSON, persisted tokens
[POS]:    CLI command layer
[UPDATE]: When adding subcommands
*/

use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use tracing::info;

use mindmeister_cli::{CliConfig, StoredToken, TokenStore};
use mindmeister_client::{AuthPerms, MindMeisterClient, Params, Payload};

pub async fn build_client(config: &CliConfig, store: &TokenStore) -> Result<MindMeisterClient> {
    let stored = store.load().await?;
    let client = config.client(stored.as_ref().map(|token| token.token.as_str()))?;
    info!(authenticated = client.is_authenticated(), "client ready");
    Ok(client)
}

pub fn auth_url(config: &CliConfig, perms: AuthPerms) -> Result<()> {
    let client = config.client(None)?;
    let url = client
        .auth_url_with_perms(perms)
        .context("build authentication URL")?;
    println!("{url}");
    Ok(())
}

pub async fn callback(config: &CliConfig, store: &TokenStore, frob: &str) -> Result<()> {
    let mut client = config.client(None)?;
    let auth = client.callback(frob).await.context("exchange frob for token")?;

    let stored = StoredToken::from_auth(&auth);
    store.save(&stored).await?;
    info!(path = %store.path().display(), "auth token stored");

    match &stored.username {
        Some(username) => println!("Authenticated as {username}"),
        None => println!("Authenticated"),
    }
    Ok(())
}

pub async fn whoami(client: &MindMeisterClient) -> Result<()> {
    let auth = client.auth_check_token().await.context("check auth token")?;
    print_json(&serde_json::to_value(auth)?)
}

pub async fn logout(store: &TokenStore) -> Result<()> {
    if store.clear().await? {
        println!("Removed {}", store.path().display());
    } else {
        println!("No stored token");
    }
    Ok(())
}

pub async fn call(client: &MindMeisterClient, name: &str, raw_params: &[String]) -> Result<()> {
    let params = parse_params(raw_params)?;
    let payload = client
        .call(name, params)
        .await
        .with_context(|| format!("call {name}"))?;
    print_payload(payload)
}

pub async fn maps(client: &MindMeisterClient, page: Option<u32>, per_page: Option<u32>) -> Result<()> {
    let payload = client
        .maps_get_list(page, per_page)
        .await
        .context("list maps")?;
    print_payload(payload)
}

/// Parse `key=value` arguments; values are sent verbatim.
pub fn parse_params(raw: &[String]) -> Result<Params> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .filter(|(key, _)| !key.is_empty())
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .ok_or_else(|| anyhow!("expected key=value, got '{pair}'"))
        })
        .collect()
}

fn print_payload(payload: Payload) -> Result<()> {
    print_json(&Value::Object(payload))
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params() {
        let params = parse_params(&["map_id=42".to_string(), "title=a=b".to_string()]).unwrap();
        assert_eq!(params.get("map_id").map(ToString::to_string).as_deref(), Some("42"));
        assert_eq!(params.get("title").map(ToString::to_string).as_deref(), Some("a=b"));
    }

    #[test]
    fn test_parse_params_rejects_bare_words() {
        assert!(parse_params(&["map_id".to_string()]).is_err());
        assert!(parse_params(&["=1".to_string()]).is_err());
    }
}
