//! Command payload assembly.
//!
//! The daemon owns the command grammar. The client only joins the tokens it
//! was given with single spaces and ships the UTF-8 bytes untouched.

use std::ffi::OsString;
use std::fmt::{Display, Formatter};

use crate::{AppError, Result};

/// Separator placed between consecutive tokens.
const TOKEN_SEPARATOR: &str = " ";

/// One opaque control command, ready to be sent as a single datagram.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandPayload {
    text: String,
}

impl CommandPayload {
    /// Join `tokens` with single spaces. Zero tokens produce an empty payload.
    #[must_use]
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (index, token) in tokens.into_iter().enumerate() {
            if index > 0 {
                text.push_str(TOKEN_SEPARATOR);
            }
            text.push_str(token.as_ref());
        }
        Self { text }
    }

    /// Join raw OS strings (as received on the command line).
    ///
    /// # Errors
    ///
    /// Returns `AppError::Encoding` naming the first token that is not valid
    /// UTF-8.
    pub fn from_os_tokens<I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let tokens = tokens
            .into_iter()
            .enumerate()
            .map(|(index, token)| {
                token.into_string().map_err(|raw| {
                    AppError::Encoding(format!(
                        "token {index} is not valid utf-8: {}",
                        raw.to_string_lossy()
                    ))
                })
            })
            .collect::<Result<Vec<String>>>()?;
        Ok(Self::from_tokens(tokens))
    }

    /// Encoded bytes exactly as they go on the wire.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Payload text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the payload has no bytes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Display for CommandPayload {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
