use tracing::debug;

use crate::base_url::{check_url, with_trailing_slash};
use crate::error::{EnvError, EnvResult, ValueKind};
use crate::parse::{parse_bool, parse_float, parse_int};
use crate::salt::normalize_salt;
use crate::source::{ProcessEnv, VarSource};

/// Typed, defaulting reads over a [`VarSource`].
///
/// The `get_*` accessors never fail: a missing, empty or malformed variable
/// yields the caller's default. The `try_*` lookups report why instead.
#[derive(Debug, Default, Clone)]
pub struct EnvReader<S> {
    source: S,
}

impl EnvReader<ProcessEnv> {
    pub fn process() -> EnvReader<ProcessEnv> {
        EnvReader { source: ProcessEnv }
    }
}

impl<S: VarSource> EnvReader<S> {
    pub fn new(source: S) -> EnvReader<S> {
        EnvReader { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The variable's value when it is set and non-empty.
    pub fn try_str(&self, key: &str) -> EnvResult<String> {
        let value = self.source.var(key)?;
        if value.is_empty() {
            return Err(EnvError::Empty(key.to_string()));
        }
        Ok(value)
    }

    pub fn try_int(&self, key: &str) -> EnvResult<i64> {
        self.try_parse(key, ValueKind::Integer, parse_int)
    }

    pub fn try_bool(&self, key: &str) -> EnvResult<bool> {
        self.try_parse(key, ValueKind::Boolean, parse_bool)
    }

    pub fn try_float(&self, key: &str) -> EnvResult<f64> {
        self.try_parse(key, ValueKind::Float, parse_float)
    }

    /// The variable as a base url ending in `/`.
    pub fn try_url(&self, key: &str) -> EnvResult<String> {
        let value = self.try_str(key)?;
        check_url(&value).map_err(|reason| EnvError::RejectedUrl {
            key: key.to_string(),
            reason,
        })?;
        Ok(with_trailing_slash(value))
    }

    fn try_parse<T, F>(&self, key: &str, kind: ValueKind, parse: F) -> EnvResult<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        let value = self.try_str(key)?;
        match parse(value.as_str()) {
            Some(v) => Ok(v),
            None => Err(EnvError::Malformed {
                key: key.to_string(),
                value,
                kind,
            }),
        }
    }

    /// Unset and empty are the same thing here: both give `default`.
    pub fn get_str(&self, key: &str, default: &str) -> String {
        match self.try_str(key) {
            Ok(v) => v,
            Err(err) => {
                debug!(key, reason = %err, "using default value");
                default.to_string()
            }
        }
    }

    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.try_int(key).unwrap_or_else(|err| {
            debug!(key, reason = %err, default, "using default value");
            default
        })
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.try_bool(key).unwrap_or_else(|err| {
            debug!(key, reason = %err, default, "using default value");
            default
        })
    }

    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        self.try_float(key).unwrap_or_else(|err| {
            debug!(key, reason = %err, default, "using default value");
            default
        })
    }

    /// A 32 character salt built from the variable, or from `default` when
    /// the variable is unset. Empty only when both are empty.
    pub fn get_salt(&self, key: &str, default: &str) -> String {
        normalize_salt(&self.get_str(key, default))
    }

    /// A validated base url ending in `/`.
    ///
    /// Anything unusable falls back to `default`. The default is trusted as
    /// given and only has the trailing slash applied.
    pub fn get_url(&self, key: &str, default: &str) -> String {
        match self.try_url(key) {
            Ok(url) => url,
            Err(err) => {
                debug!(key, reason = %err, default, "using default url");
                with_trailing_slash(default.to_string())
            }
        }
    }
}

/// Reads from the process environment.
pub struct Env {}

impl Env {
    pub fn get_str(key: &str, default: &str) -> String {
        EnvReader::process().get_str(key, default)
    }

    pub fn get_int(key: &str, default: i64) -> i64 {
        EnvReader::process().get_int(key, default)
    }

    pub fn get_bool(key: &str, default: bool) -> bool {
        EnvReader::process().get_bool(key, default)
    }

    pub fn get_float(key: &str, default: f64) -> f64 {
        EnvReader::process().get_float(key, default)
    }

    pub fn get_salt(key: &str, default: &str) -> String {
        EnvReader::process().get_salt(key, default)
    }

    pub fn get_url(key: &str, default: &str) -> String {
        EnvReader::process().get_url(key, default)
    }

    pub fn try_str(key: &str) -> EnvResult<String> {
        EnvReader::process().try_str(key)
    }

    pub fn try_int(key: &str) -> EnvResult<i64> {
        EnvReader::process().try_int(key)
    }

    pub fn try_bool(key: &str) -> EnvResult<bool> {
        EnvReader::process().try_bool(key)
    }

    pub fn try_float(key: &str) -> EnvResult<f64> {
        EnvReader::process().try_float(key)
    }

    pub fn try_url(key: &str) -> EnvResult<String> {
        EnvReader::process().try_url(key)
    }
}
