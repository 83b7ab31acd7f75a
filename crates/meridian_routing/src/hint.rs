use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use thiserror::Error;

use crate::phantom_node::PhantomNode;

#[derive(Debug, Error)]
pub enum HintError {
    #[error("Hint is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Hint payload could not be encoded: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Hint payload could not be decoded: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Hint payload has {0} trailing bytes")]
    TrailingBytes(usize),
}

/// Encodes a resolved location so that a client can hand it back later and
/// skip the spatial lookup.
pub fn encode_hint(node: &PhantomNode) -> Result<String, HintError> {
    let bytes = bincode::serde::encode_to_vec(node, bincode::config::standard())?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

pub fn decode_hint(hint: &str) -> Result<PhantomNode, HintError> {
    let bytes = URL_SAFE_NO_PAD.decode(hint)?;
    let (node, read): (PhantomNode, usize) =
        bincode::serde::decode_from_slice(&bytes, bincode::config::standard())?;

    if read != bytes.len() {
        return Err(HintError::TrailingBytes(bytes.len() - read));
    }

    Ok(node)
}
