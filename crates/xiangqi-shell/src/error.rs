//! Shell command errors.

/// Errors that can occur while parsing or running shell commands.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// A command needs a coordinate that was not given.
    #[error("missing coordinate for {command}")]
    MissingCoordinate {
        /// The command that was missing the argument.
        command: &'static str,
    },

    /// A coordinate argument is not a number or lies off the board.
    #[error("invalid coordinate: {value}")]
    InvalidCoordinate {
        /// The offending argument text.
        value: String,
    },

    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        /// The parse failure.
        source: xiangqi_core::FenError,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `set` gave a value the option does not accept.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
