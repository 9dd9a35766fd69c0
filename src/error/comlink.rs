use thiserror::Error;

/// Errors produced by the Comlink client and its payload builders.
///
/// Every variant that results from a remote call carries the endpoint name so
/// callers can build a meaningful message without inspecting the source chain.
/// None of these are retried automatically; a failed call yields exactly one
/// error to its caller.
#[derive(Error, Debug)]
pub enum ComlinkError {
    /// Network-level failure reaching the Comlink or stats service.
    #[error("Request to Comlink endpoint '{endpoint}' failed")]
    Transport {
        /// Endpoint path the request was dispatched to.
        endpoint: String,
        /// Underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// Request body could not be serialized before dispatch.
    #[error("Could not encode request body for Comlink endpoint '{endpoint}'")]
    Encode {
        /// Endpoint path the request was meant for.
        endpoint: String,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Response body was not valid JSON, or did not match the typed mapping
    /// requested for this endpoint.
    #[error("Could not decode response from Comlink endpoint '{endpoint}'")]
    Decode {
        /// Endpoint path the response came from.
        endpoint: String,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Caller-supplied arguments were rejected before any network call.
    ///
    /// Covers unrecognized league/division names, incomplete leaderboard
    /// queries, and malformed ally codes or profile links.
    #[error("{0}")]
    Validation(String),
}

impl ComlinkError {
    /// Shorthand for building a [`ComlinkError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        ComlinkError::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("not json").unwrap_err()
    }

    #[test]
    fn encode_and_decode_errors_name_their_direction() {
        let encode = ComlinkError::Encode {
            endpoint: "player".to_string(),
            source: json_error(),
        };
        assert_eq!(
            encode.to_string(),
            "Could not encode request body for Comlink endpoint 'player'"
        );

        let decode = ComlinkError::Decode {
            endpoint: "player".to_string(),
            source: json_error(),
        };
        assert_eq!(
            decode.to_string(),
            "Could not decode response from Comlink endpoint 'player'"
        );
    }
}
