//! Extração de links de streaming de páginas de filmes e séries.
//!
//! A partir da URL da página, [`StreamProvider`] descobre o ID do conteúdo,
//! chama o endpoint `player-data` do site, remove a ofuscação dos links e
//! devolve tradução → qualidade → URL (filmes) ou
//! tradução → temporada → episódio → qualidade → URL (séries).
//!
//! ```no_run
//! # async fn run() -> filmrust::Result<()> {
//! let provider = filmrust::StreamProvider::new(
//!     "https://filmix.my/film/triller/173398-v-megan-k-vashim-uslugam-2024.html",
//! )?;
//! let data = provider.get_stream_data().await?;
//! println!("{}", serde_json::to_string_pretty(&data).unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod decoder;
pub mod error;
pub mod extractor;
pub mod models;
pub mod utils;

pub use config::ProviderConfig;
pub use error::{DecodeError, EntryError, ExtractError, Result};
pub use extractor::StreamProvider;
pub use models::{Episode, EpisodeGroup, QualityMap, StreamData, TranslationStreams};
