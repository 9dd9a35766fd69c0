use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Exactly one of the Comlink HMAC keys was supplied.
    ///
    /// Request signing needs both the access key and the secret key. Setting only
    /// one of them is treated as a startup error rather than being discovered on
    /// the first signed request.
    #[error("Partial Comlink credentials: {0} is set but {1} is missing")]
    PartialCredentials(&'static str, &'static str),
}
