use std::collections::HashMap;
use std::env;

use crate::error::{EnvError, EnvResult};

/// Somewhere environment-style variables can be read from.
///
/// Implementations return the raw value, which may be empty. Deciding what an
/// empty value means is left to the reader.
pub trait VarSource {
    fn var(&self, key: &str) -> EnvResult<String>;
}

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn var(&self, key: &str) -> EnvResult<String> {
        match env::var_os(key) {
            Some(v) => v
                .into_string()
                .map_err(|_| EnvError::NotUnicode(key.to_string())),
            None => Err(EnvError::NotPresent(key.to_string())),
        }
    }
}

impl VarSource for HashMap<String, String> {
    fn var(&self, key: &str) -> EnvResult<String> {
        self.get(key)
            .cloned()
            .ok_or_else(|| EnvError::NotPresent(key.to_string()))
    }
}

impl<S: VarSource + ?Sized> VarSource for &S {
    fn var(&self, key: &str) -> EnvResult<String> {
        (**self).var(key)
    }
}
