//! Typed, defaulting reads of environment variables.
//!
//! ```no_run
//! use envkit::Env;
//!
//! let port = Env::get_int("PORT", 8080);
//! let api = Env::get_url("API_URL", "http://localhost:8000");
//! let salt = Env::get_salt("HASH_SALT", "change-me");
//! ```

#[macro_use]
extern crate quick_error;

mod base_url;
mod env;
mod error;
mod parse;
mod salt;
mod source;

pub use base_url::{check_url, with_trailing_slash, ALLOWED_URL_SCHEMES};
pub use env::{Env, EnvReader};
pub use error::{EnvError, EnvResult, UrlRejection, ValueKind};
pub use parse::{parse_bool, parse_float, parse_int};
pub use salt::{fingerprint, normalize_salt, SALT_LEN};
pub use source::{ProcessEnv, VarSource};
