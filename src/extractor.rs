// src/extractor.rs

use reqwest::Client;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use url::Url;

use crate::api;
use crate::config::ProviderConfig;
use crate::decoder;
use crate::error::{ExtractError, Result};
use crate::models::{
    Episode, EpisodeGroup, FolderEntry, PlayerDataResponse, QualityMap, SeriesEntry, StreamData,
    TranslationStreams,
};
use crate::utils::{category_from_url, content_id_from_url, current_timestamp, parse_quality_list};

const MOVIE_CATEGORY: &str = "film";

/// Extrai os links de streaming de uma página de filme ou série.
///
/// Um provider corresponde a uma única URL e não muda depois de criado.
/// As requisições são feitas uma de cada vez, na ordem das traduções.
#[derive(Debug)]
pub struct StreamProvider {
    player_data_url: Url,
    content_id: u64,
    category: String,
    client: Client,
    config: ProviderConfig,
}

impl StreamProvider {
    pub fn new(url: &str) -> Result<Self> {
        Self::with_config(url, ProviderConfig::default())
    }

    pub fn with_config(url: &str, config: ProviderConfig) -> Result<Self> {
        let source = Url::parse(url)?;

        let content_id = content_id_from_url(&source)
            .ok_or_else(|| ExtractError::MissingContentId(url.to_string()))?;
        let category = category_from_url(&source);
        let player_data_url = api::player_data_url(&source, current_timestamp())?;
        let client = api::build_client(&config)?;

        debug!(content_id, %category, %player_data_url, "Created stream provider");

        Ok(Self {
            player_data_url,
            content_id,
            category,
            client,
            config,
        })
    }

    pub fn content_id(&self) -> u64 {
        self.content_id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn player_data_url(&self) -> &Url {
        &self.player_data_url
    }

    pub fn is_movie(&self) -> bool {
        self.category == MOVIE_CATEGORY
    }

    /// Busca os dados do player e devolve tradução → links.
    pub async fn get_stream_data(&self) -> Result<StreamData> {
        let response = api::fetch_player_data(
            &self.client,
            &self.player_data_url,
            self.content_id,
            &self.config,
        )
        .await?;

        self.assemble(&response).await
    }

    /// Monta o resultado a partir de uma resposta já obtida.
    ///
    /// Resposta sem `type == "success"` dá resultado vazio. Para séries,
    /// baixa o índice de episódios de cada tradução.
    pub async fn assemble(&self, response: &PlayerDataResponse) -> Result<StreamData> {
        let mut result = StreamData::new();

        if !response.is_success() {
            info!(
                kind = response.kind.as_deref().unwrap_or("<missing>"),
                "Player data request was not successful"
            );
            return Ok(result);
        }

        for (translation, video) in response.videos()? {
            let Some(video) = video.as_str() else {
                warn!(%translation, "Skipping translation with non-string video");
                continue;
            };

            let streams = if self.is_movie() {
                TranslationStreams::Movie(movie_qualities(video))
            } else {
                TranslationStreams::Series(self.series_episodes(translation, video).await?)
            };
            result.insert(translation.clone(), streams);
        }

        info!(translations = result.len(), "Extracted stream links");
        Ok(result)
    }

    async fn series_episodes(
        &self,
        translation: &str,
        video: &str,
    ) -> Result<BTreeMap<String, EpisodeGroup>> {
        let index_url = decoder::decode(video);
        if index_url.is_empty() {
            warn!(%translation, "Series index URL could not be decoded");
            return Ok(BTreeMap::new());
        }

        let index = api::fetch_series_index(&self.client, &index_url).await?;
        build_series(&index)
    }
}

// Filme: o vídeo decodificado é uma lista "[qualidade]url" separada por vírgulas
pub fn movie_qualities(video: &str) -> QualityMap {
    parse_quality_list(decoder::decode(video).split(','))
}

/// Converte o índice de episódios em título do grupo → ID → episódio.
///
/// O índice precisa ser um array; entradas malformadas dentro dele são
/// registradas e puladas. Grupos com o mesmo título são mesclados.
pub fn build_series(index: &Value) -> Result<BTreeMap<String, EpisodeGroup>> {
    let entries = index
        .as_array()
        .ok_or_else(|| ExtractError::Shape("series index is not an array".to_string()))?;

    let mut groups: BTreeMap<String, EpisodeGroup> = BTreeMap::new();

    for (position, raw) in entries.iter().enumerate() {
        let entry = match SeriesEntry::from_value(raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(position, error = %e, "Skipping malformed series entry");
                continue;
            }
        };

        for raw_folder in &entry.folder {
            let folder = match FolderEntry::from_value(raw_folder) {
                Ok(folder) => folder,
                Err(e) => {
                    warn!(group = %entry.title, error = %e, "Skipping malformed episode");
                    continue;
                }
            };

            let episode = Episode {
                title: folder.title,
                quality: parse_quality_list(episode_files(&folder.file).split(',')),
            };
            groups
                .entry(entry.title.clone())
                .or_default()
                .insert(folder.id, episode);
        }
    }

    Ok(groups)
}

// A lista de arquivos às vezes já vem em texto puro ("[480p]http://...");
// caso contrário está ofuscada como o resto do player
fn episode_files(file: &str) -> String {
    if file.trim_start().starts_with('[') {
        file.to_string()
    } else {
        decoder::decode(file)
    }
}
