use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use crate::config::ProviderConfig;
use crate::error::{ExtractError, Result};
use crate::models::PlayerDataResponse;

const PLAYER_DATA_PATH: &str = "/api/movies/player-data";

// Cliente HTTP compartilhado pelas requisições de um provider
pub fn build_client(config: &ProviderConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.timeout)
        .build()?;

    Ok(client)
}

/// Monta `<scheme>://<host>/api/movies/player-data?t=<timestamp>` a partir
/// da URL da página. O parâmetro `t` só serve para furar cache.
pub fn player_data_url(source: &Url, timestamp: u64) -> Result<Url> {
    let mut endpoint = source.join(PLAYER_DATA_PATH)?;
    endpoint.set_query(Some(&format!("t={}", timestamp)));
    endpoint.set_fragment(None);

    Ok(endpoint)
}

// Função para buscar os dados do player (POST autenticado por cookie)
pub async fn fetch_player_data(
    client: &Client,
    endpoint: &Url,
    content_id: u64,
    config: &ProviderConfig,
) -> Result<PlayerDataResponse> {
    debug!(%endpoint, content_id, "Requesting player data");

    let post_id = content_id.to_string();
    let response = client
        .post(endpoint.clone())
        .header("x-requested-with", "XMLHttpRequest")
        .header("Cookie", &config.session_cookie)
        .form(&[("post_id", post_id.as_str()), ("showfull", "true")])
        .send()
        .await?;

    read_json(response).await
}

// Função para baixar o índice de episódios de uma tradução (GET simples)
pub async fn fetch_series_index(client: &Client, url: &str) -> Result<serde_json::Value> {
    debug!(url, "Requesting series index");

    let response = client.get(url).send().await?;

    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let url = response.url().to_string();

    if status != StatusCode::OK {
        return Err(ExtractError::Status {
            url,
            status: status.as_u16(),
        });
    }

    let text = response.text().await?;

    serde_json::from_str(&text).map_err(|e| {
        error!(%url, error = %e, "Failed to parse JSON response");
        debug!("Response text: {}", text.chars().take(500).collect::<String>());
        ExtractError::Json(e)
    })
}
