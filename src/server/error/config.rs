use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set to a value the application cannot use.
    #[error("Invalid value '{value}' for environment variable {name}: expected {expected}")]
    InvalidValue {
        /// Name of the environment variable
        name: String,
        /// The rejected value
        value: String,
        /// Description of the accepted values
        expected: String,
    },
}
