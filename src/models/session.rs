use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Local time-of-day trading session. Variant order is the fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Session {
    S1,
    S2,
    S3,
    S4,
    IS4,
}

impl Session {
    pub const ALL: [Session; 5] = [
        Session::S1,
        Session::S2,
        Session::S3,
        Session::S4,
        Session::IS4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Session::S1 => "S1",
            Session::S2 => "S2",
            Session::S3 => "S3",
            Session::S4 => "S4",
            Session::IS4 => "IS4",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Session> {
        match s.trim().to_uppercase().as_str() {
            "S1" => Some(Session::S1),
            "S2" => Some(Session::S2),
            "S3" => Some(Session::S3),
            "S4" => Some(Session::S4),
            "IS4" => Some(Session::IS4),
            _ => None,
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Session grouping key. Trades without a recorded session fall into `Unset`,
/// which sorts after every known session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SessionLabel {
    Known(Session),
    Unset,
}

impl From<Option<Session>> for SessionLabel {
    fn from(session: Option<Session>) -> Self {
        match session {
            Some(s) => SessionLabel::Known(s),
            None => SessionLabel::Unset,
        }
    }
}

impl fmt::Display for SessionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionLabel::Known(s) => write!(f, "{}", s),
            SessionLabel::Unset => write!(f, "N/A"),
        }
    }
}

/// Accepts `"S1"`..`"IS4"`, and treats null, `""` and `"N/A"` as no session.
pub fn deserialize_optional_session<'de, D>(deserializer: D) -> Result<Option<Session>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Session::from_str_loose))
}
