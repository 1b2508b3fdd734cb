use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::warn;

use crate::error::DecodeError;

// Marcador que precede todo token de lixo inserido pelo player
const SENTINEL: &str = ":<:";

// Tokens conhecidos. Se o site trocar a ofuscação, a decodificação
// passa a falhar (ver `try_decode`).
const JUNK_TOKENS: [&str; 5] = [
    ":<:bzl3UHQwaWk0MkdXZVM3TDdB",
    ":<:SURhQnQwOEM5V2Y3bFlyMGVI",
    ":<:bE5qSTlWNVUxZ01uc3h0NFFy",
    ":<:Mm93S0RVb0d6c3VMTkV5aE54",
    ":<:MTluMWlLQnI4OXVic2tTNXpU",
];

/// Decodifica uma string ofuscada do player.
///
/// Retorna string vazia em qualquer falha; o motivo vai para o log em nível
/// `warn`. Use [`try_decode`] quando precisar do erro.
pub fn decode(encoded: &str) -> String {
    match try_decode(encoded) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!(error = %e, "Failed to decode obfuscated string");
            String::new()
        }
    }
}

/// Mesma decodificação de [`decode`], mas devolvendo o motivo da falha.
pub fn try_decode(encoded: &str) -> Result<String, DecodeError> {
    // Os dois primeiros caracteres são descartáveis
    let payload = match encoded.char_indices().nth(2) {
        Some((idx, _)) => &encoded[idx..],
        None if encoded.chars().count() == 2 => "",
        None => return Err(DecodeError::TooShort),
    };

    let mut clean = payload.replace("\\/", "/");

    // Remover um token pode juntar as metades de outro, então repete até
    // não sobrar nenhum sentinela
    while clean.contains(SENTINEL) {
        let before = clean.len();
        for token in JUNK_TOKENS {
            clean = clean.replace(token, "");
        }
        if clean.len() == before {
            let at = clean.find(SENTINEL).unwrap_or(0);
            let near: String = clean[at..].chars().take(32).collect();
            return Err(DecodeError::UnknownToken(near));
        }
    }

    let bytes = STANDARD.decode(clean.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}
