use std::{
    convert::Infallible,
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Outcome of the last charger connection test, stored as prefixed text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ConnectionStatus {
    #[default]
    NotTested,

    Connected(String),

    Failed(String),
}

impl ConnectionStatus {
    const NOT_TESTED: &'static str = "Not tested";
    const CONNECTED_PREFIX: &'static str = "✓ ";
    const FAILED_PREFIX: &'static str = "✗ ";
}

impl<E: Display> From<&Result<String, E>> for ConnectionStatus {
    fn from(result: &Result<String, E>) -> Self {
        match result {
            Ok(message) => Self::Connected(message.clone()),
            Err(error) => Self::Failed(error.to_string()),
        }
    }
}

impl Display for ConnectionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotTested => f.write_str(Self::NOT_TESTED),
            Self::Connected(message) => write!(f, "{}{message}", Self::CONNECTED_PREFIX),
            Self::Failed(message) => write!(f, "{}{message}", Self::FAILED_PREFIX),
        }
    }
}

/// Unrecognised text reads back as [`ConnectionStatus::NotTested`].
impl FromStr for ConnectionStatus {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if let Some(message) = text.strip_prefix(Self::CONNECTED_PREFIX) {
            Ok(Self::Connected(message.to_owned()))
        } else if let Some(message) = text.strip_prefix(Self::FAILED_PREFIX) {
            Ok(Self::Failed(message.to_owned()))
        } else {
            Ok(Self::NotTested)
        }
    }
}
