// Tipos de erro da biblioteca

/// Erros que interrompem uma extração inteira.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A URL de entrada não pôde ser interpretada
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// O último segmento da URL não começa com um ID numérico
    #[error("No content ID found in URL: {0}")]
    MissingContentId(String),

    /// Falha de transporte (conexão, timeout, corpo truncado)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Resposta HTTP diferente de 200
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// Corpo da resposta não é JSON válido
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON válido, mas sem os campos esperados no nível superior
    #[error("Unexpected response shape: {0}")]
    Shape(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Motivos pelos quais uma string ofuscada não pôde ser decodificada.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("encoded string is shorter than its 2-character marker")]
    TooShort,

    /// Sobrou um `:<:` que não está na tabela de tokens conhecidos
    #[error("unknown obfuscation token near {0:?}")]
    UnknownToken(String),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Entrada malformada do índice de episódios. Nunca aborta a extração:
/// o montador registra e pula a entrada.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("entry is not a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` should be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}
