use clap::{ArgEnum, Parser};
use envkit::{
    fingerprint, normalize_salt, parse_bool, parse_float, parse_int, EnvError, EnvReader,
    ProcessEnv, ValueKind,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[macro_use]
extern crate quick_error;
quick_error! {
    #[derive(Debug)]
    pub enum ApplicationError {
        EnvError(err: EnvError) {
            source(err)
            display("Env Error: {}", err)
            from()
        }
        InvalidDefault(value: String, kind: ValueKind) {
            display("Default {:?} is not a valid {}", value, kind)
        }
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(ArgEnum, Clone, Copy, Debug)]
enum Kind {
    Str,
    Int,
    Bool,
    Float,
    Salt,
    Url,
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Resolve an environment variable", long_about = None)]
struct Args {
    /// Name of the variable to read
    key: String,
    #[clap(short, long, arg_enum, default_value = "str")]
    kind: Kind,
    /// Value used when the variable is unset or unusable
    #[clap(short, long)]
    default: Option<String>,
    /// Print the salt itself instead of its SHA-256 fingerprint
    #[clap(short, long)]
    reveal: bool,
    /// Fail instead of falling back when the variable is unset or malformed
    #[clap(short, long)]
    strict: bool,
}

struct Resolver {
    env: EnvReader<ProcessEnv>,
}

impl Resolver {
    fn lenient(&self, args: &Args) -> ApplicationResult<String> {
        let key = args.key.as_str();
        let raw_default = args.default.as_deref();
        let default = raw_default.unwrap_or("");

        let value = match args.kind {
            Kind::Str => self.env.get_str(key, default),
            Kind::Int => {
                let default = typed_default(raw_default, ValueKind::Integer, parse_int, 0)?;
                self.env.get_int(key, default).to_string()
            }
            Kind::Bool => {
                let default = typed_default(raw_default, ValueKind::Boolean, parse_bool, false)?;
                self.env.get_bool(key, default).to_string()
            }
            Kind::Float => {
                let default = typed_default(raw_default, ValueKind::Float, parse_float, 0.0)?;
                self.env.get_float(key, default).to_string()
            }
            Kind::Salt => self.env.get_salt(key, default),
            Kind::Url => self.env.get_url(key, default),
        };
        Ok(value)
    }

    fn strict(&self, args: &Args) -> ApplicationResult<String> {
        let key = args.key.as_str();

        let value = match args.kind {
            Kind::Str => self.env.try_str(key)?,
            Kind::Int => self.env.try_int(key)?.to_string(),
            Kind::Bool => self.env.try_bool(key)?.to_string(),
            Kind::Float => self.env.try_float(key)?.to_string(),
            Kind::Salt => normalize_salt(&self.env.try_str(key)?),
            Kind::Url => self.env.try_url(key)?,
        };
        Ok(value)
    }
}

/// The `--default` flag as a typed value. A missing flag gives `zero`; a flag
/// that does not parse is an error.
fn typed_default<T>(
    raw: Option<&str>,
    kind: ValueKind,
    parse: fn(&str) -> Option<T>,
    zero: T,
) -> ApplicationResult<T> {
    match raw {
        None => Ok(zero),
        Some(value) => {
            parse(value).ok_or_else(|| ApplicationError::InvalidDefault(value.to_string(), kind))
        }
    }
}

fn main() -> ApplicationResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "envkit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let resolver = Resolver {
        env: EnvReader::process(),
    };

    let value = if args.strict {
        resolver.strict(&args)?
    } else {
        resolver.lenient(&args)?
    };

    match args.kind {
        Kind::Salt if !args.reveal && !value.is_empty() => println!("{}", fingerprint(&value)),
        _ => println!("{}", value),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_default_is_zero() {
        assert_eq!(typed_default(None, ValueKind::Integer, parse_int, 0).unwrap(), 0);
        assert!(!typed_default(None, ValueKind::Boolean, parse_bool, false).unwrap());
    }

    #[test]
    fn test_default_is_parsed() {
        let raw = Some("42");
        assert_eq!(typed_default(raw, ValueKind::Integer, parse_int, 0).unwrap(), 42);

        let raw = Some("T");
        assert!(typed_default(raw, ValueKind::Boolean, parse_bool, false).unwrap());

        let raw = Some("0.5");
        assert_eq!(typed_default(raw, ValueKind::Float, parse_float, 0.0).unwrap(), 0.5);
    }

    #[test]
    fn test_malformed_default_is_rejected() {
        let raw = Some("abc");
        let err = typed_default(raw, ValueKind::Integer, parse_int, 0).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::InvalidDefault(ref value, ValueKind::Integer) if value == "abc"
        ));
        assert_eq!(err.to_string(), "Default \"abc\" is not a valid integer");

        let raw = Some("yes");
        assert!(typed_default(raw, ValueKind::Boolean, parse_bool, false).is_err());

        let raw = Some("1e400");
        assert!(typed_default(raw, ValueKind::Float, parse_float, 0.0).is_err());
    }
}
