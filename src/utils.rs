use regex::Regex;
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

use crate::models::QualityMap;

static QUALITY_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]").expect("valid quality label pattern"));

// Função para extrair o ID do conteúdo a partir da URL
//
// O último segmento tem a forma "<id>-<slug>.html", por exemplo
// "173398-v-megan-k-vashim-uslugam-2024.html". Retorna None se o prefixo
// não for numérico ou for zero.
pub fn content_id_from_url(url: &Url) -> Option<u64> {
    let last = url.path_segments()?.last()?;
    let prefix = last.split_once('-').map_or(last, |(id, _)| id);

    prefix.parse::<u64>().ok().filter(|id| *id > 0)
}

// Função para obter a categoria (primeiro segmento não vazio do caminho)
pub fn category_from_url(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.find(|s| !s.is_empty()))
        .unwrap_or("")
        .to_string()
}

/// Converte entradas como `"[720p]http://..."` num mapa qualidade → URL.
///
/// Entradas sem rótulo entre colchetes são descartadas. Rótulos repetidos
/// ficam com a última URL.
pub fn parse_quality_list<I, S>(items: I) -> QualityMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut qualities = QualityMap::new();

    for item in items {
        let item = item.as_ref();
        if let Some(caps) = QUALITY_LABEL.captures(item) {
            let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let link = item.replacen(whole.as_str(), "", 1).trim().to_string();
            qualities.insert(label.as_str().to_string(), link);
        }
    }

    qualities
}

// Obtém o timestamp atual (usado como cache-buster no endpoint)
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn extracts_content_id() {
        assert_eq!(
            content_id_from_url(&url("https://x/film/a/173398-title.html")),
            Some(173398)
        );
        assert_eq!(
            content_id_from_url(&url(
                "https://filmix.my/film/triller/173398-v-megan-k-vashim-uslugam-2024.html"
            )),
            Some(173398)
        );
    }

    #[test]
    fn content_id_ignores_query_string() {
        assert_eq!(
            content_id_from_url(&url("https://x/seria/drama/42-show.html?page=2")),
            Some(42)
        );
    }

    #[test]
    fn missing_content_id() {
        assert_eq!(content_id_from_url(&url("https://x/film/a/title.html")), None);
        assert_eq!(content_id_from_url(&url("https://x/film/a/")), None);
        assert_eq!(content_id_from_url(&url("https://x/film/a/0-zero.html")), None);
        assert_eq!(content_id_from_url(&url("https://x/film/a/12abc-title")), None);
    }

    #[test]
    fn content_id_without_slug() {
        assert_eq!(content_id_from_url(&url("https://x/film/a/777")), Some(777));
    }

    #[test]
    fn category_is_first_segment() {
        assert_eq!(category_from_url(&url("https://x/film/a/1-t.html")), "film");
        assert_eq!(category_from_url(&url("https://x//seria/1-t.html")), "seria");
        assert_eq!(category_from_url(&url("https://x/")), "");
    }

    #[test]
    fn quality_list_drops_unlabeled_entries() {
        let map = parse_quality_list(["[720p]http://a", "noformat"]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("720p").map(String::as_str), Some("http://a"));
    }

    #[test]
    fn quality_list_trims_and_keeps_last_duplicate() {
        let map = parse_quality_list([" [480p] http://a ", "[480p]http://b", "[1080p Ultra+]http://c"]);
        assert_eq!(map.get("480p").map(String::as_str), Some("http://b"));
        assert_eq!(map.get("1080p Ultra+").map(String::as_str), Some("http://c"));
    }

    #[test]
    fn quality_list_removes_only_first_bracket() {
        let map = parse_quality_list(["[720p]http://a/[x].mp4"]);
        assert_eq!(map.get("720p").map(String::as_str), Some("http://a/[x].mp4"));
    }
}
