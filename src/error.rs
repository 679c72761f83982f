use std::error::Error;
use std::fmt;

quick_error! {
    #[derive(Debug, PartialEq)]
    pub enum EnvError {
        NotPresent(key: String) {
            display("Environment variable {} is not set", key)
        }
        Empty(key: String) {
            display("Environment variable {} is set but empty", key)
        }
        NotUnicode(key: String) {
            display("Environment variable {} is not valid unicode", key)
        }
        Malformed { key: String, value: String, kind: ValueKind } {
            display("Environment variable {} = {:?} is not a valid {}", key, value, kind)
        }
        RejectedUrl { key: String, reason: UrlRejection } {
            source(reason)
            display("Environment variable {} is not a usable url: {}", key, reason)
        }
    }
}

pub type EnvResult<T> = Result<T, EnvError>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueKind {
    Integer,
    Boolean,
    Float,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Boolean => write!(f, "boolean"),
            ValueKind::Float => write!(f, "float"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UrlRejection {
    Unparsable(String),
    SchemeNotAllowed(String),
    MissingHost,
}

impl Error for UrlRejection {}

impl fmt::Display for UrlRejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UrlRejection::Unparsable(m) => write!(f, "Could not parse url - {}", m),
            UrlRejection::SchemeNotAllowed(scheme) => {
                write!(f, "Scheme {:?} is not one of http, https, wss", scheme)
            }
            UrlRejection::MissingHost => write!(f, "Url has no host"),
        }
    }
}
