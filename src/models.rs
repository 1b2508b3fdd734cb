use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::{EntryError, ExtractError, Result};

/// Rótulo de qualidade (`"720p"`) → URL direta do vídeo.
pub type QualityMap = BTreeMap<String, String>;

/// ID do episódio → episódio.
pub type EpisodeGroup = BTreeMap<String, Episode>;

/// Tradução → links.
pub type StreamData = BTreeMap<String, TranslationStreams>;

// Estrutura para representar um episódio de série
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub title: String,
    pub quality: QualityMap,
}

/// Links de uma tradução: filme (qualidades direto) ou série (grupos de
/// episódios indexados pelo título do grupo).
///
/// Tipo só de saída: um `{}` vazio não diz se era filme ou série.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TranslationStreams {
    Movie(QualityMap),
    Series(BTreeMap<String, EpisodeGroup>),
}

// Resposta do endpoint /api/movies/player-data
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerDataResponse {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl PlayerDataResponse {
    pub fn is_success(&self) -> bool {
        self.kind.as_deref() == Some("success")
    }

    /// Mapa `message.translations.video`. Ausente ou de tipo errado é erro
    /// fatal; valores individuais são validados pelo montador.
    pub fn videos(&self) -> Result<&Map<String, Value>> {
        self.message
            .as_ref()
            .and_then(|m| m.get("translations"))
            .and_then(|t| t.get("video"))
            .and_then(Value::as_object)
            .ok_or_else(|| {
                ExtractError::Shape("missing object at message.translations.video".to_string())
            })
    }
}

// Grupo de episódios do índice da série (normalmente uma temporada)
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEntry {
    pub title: String,
    pub folder: Vec<Value>,
}

impl SeriesEntry {
    pub fn from_value(value: &Value) -> std::result::Result<Self, EntryError> {
        let obj = value.as_object().ok_or(EntryError::NotAnObject)?;

        let title = required_str(obj, "title")?.trim().to_string();
        let folder = obj
            .get("folder")
            .ok_or(EntryError::MissingField("folder"))?
            .as_array()
            .ok_or(EntryError::WrongType {
                field: "folder",
                expected: "an array",
            })?
            .clone();

        Ok(Self { title, folder })
    }
}

// Episódio dentro de um grupo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub id: String,
    pub title: String,
    /// Lista ofuscada de qualidades separada por vírgulas
    pub file: String,
}

impl FolderEntry {
    pub fn from_value(value: &Value) -> std::result::Result<Self, EntryError> {
        let obj = value.as_object().ok_or(EntryError::NotAnObject)?;

        let id = match obj.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(_) => {
                return Err(EntryError::WrongType {
                    field: "id",
                    expected: "a string or number",
                });
            }
            None => return Err(EntryError::MissingField("id")),
        };
        let title = required_str(obj, "title")?.trim().to_string();
        let file = required_str(obj, "file")?.to_string();

        Ok(Self { id, title, file })
    }
}

fn required_str<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> std::result::Result<&'a str, EntryError> {
    obj.get(field)
        .ok_or(EntryError::MissingField(field))?
        .as_str()
        .ok_or(EntryError::WrongType {
            field,
            expected: "a string",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn player_data_success_flag() {
        let resp: PlayerDataResponse =
            serde_json::from_value(json!({"type": "success", "message": {}})).unwrap();
        assert!(resp.is_success());

        let resp: PlayerDataResponse = serde_json::from_value(json!({"type": "error"})).unwrap();
        assert!(!resp.is_success());

        let resp: PlayerDataResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!resp.is_success());
    }

    #[test]
    fn videos_requires_object() {
        let resp: PlayerDataResponse = serde_json::from_value(json!({
            "type": "success",
            "message": {"translations": {"video": []}}
        }))
        .unwrap();
        assert!(matches!(resp.videos(), Err(ExtractError::Shape(_))));

        let resp: PlayerDataResponse = serde_json::from_value(json!({
            "type": "success",
            "message": {"translations": {"video": {"Dub": "#2abc"}}}
        }))
        .unwrap();
        assert_eq!(resp.videos().unwrap().len(), 1);
    }

    #[test]
    fn folder_entry_accepts_numeric_id() {
        let entry = FolderEntry::from_value(&json!({
            "id": 1201, "title": " Серия 1 ", "file": "#2xyz"
        }))
        .unwrap();
        assert_eq!(entry.id, "1201");
        assert_eq!(entry.title, "Серия 1");
    }

    #[test]
    fn folder_entry_rejects_non_string_title() {
        let err = FolderEntry::from_value(&json!({"id": "s1e1", "title": 5, "file": "#2"}))
            .unwrap_err();
        assert_eq!(
            err,
            EntryError::WrongType {
                field: "title",
                expected: "a string"
            }
        );
    }

    #[test]
    fn series_entry_requires_folder_array() {
        let err = SeriesEntry::from_value(&json!({"title": "Сезон 1"})).unwrap_err();
        assert_eq!(err, EntryError::MissingField("folder"));

        let err = SeriesEntry::from_value(&json!("nope")).unwrap_err();
        assert_eq!(err, EntryError::NotAnObject);
    }

    #[test]
    fn translation_streams_serialize_untagged() {
        let mut quality = QualityMap::new();
        quality.insert("720p".to_string(), "http://a".to_string());
        let value = serde_json::to_value(TranslationStreams::Movie(quality)).unwrap();
        assert_eq!(value, json!({"720p": "http://a"}));

        let mut group = EpisodeGroup::new();
        group.insert(
            "s1e1".to_string(),
            Episode {
                title: "Серия 1".to_string(),
                quality: QualityMap::new(),
            },
        );
        let mut series = BTreeMap::new();
        series.insert("Сезон 1".to_string(), group);
        let value = serde_json::to_value(TranslationStreams::Series(series)).unwrap();
        assert_eq!(
            value,
            json!({"Сезон 1": {"s1e1": {"title": "Серия 1", "quality": {}}}})
        );
    }

    #[test]
    fn empty_movie_and_series_serialize_alike() {
        let movie = serde_json::to_value(TranslationStreams::Movie(QualityMap::new())).unwrap();
        let series = serde_json::to_value(TranslationStreams::Series(BTreeMap::new())).unwrap();
        assert_eq!(movie, json!({}));
        assert_eq!(movie, series);
    }
}
