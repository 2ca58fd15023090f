//! Command dispatch.

mod pos;
mod tokens;

pub use pos::{pos, synth};
pub use tokens::{keyword, negate, tokens};

use crate::CliError;

pub const USAGE: &str = "\
lexis <command> [args]

Commands:
  tokens [--keywords]   Print the token catalog
  keyword <text>...     Look up keywords by spelling
  negate <operator>     Negate a comparison operator (spelling or name)
  pos <raw>...          Classify raw source positions
  synth <offset>...     Encode source offsets as synthetic positions";

/// Run the command named by `args[0]` and return its rendered output.
pub fn run(args: &[String]) -> Result<String, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(CliError::Usage(USAGE));
    };
    tracing::debug!(command = command.as_str(), args = rest.len(), "dispatch");

    match command.as_str() {
        "tokens" => match rest {
            [] => Ok(tokens(false)),
            [flag] if flag == "--keywords" => Ok(tokens(true)),
            _ => Err(CliError::Usage("lexis tokens [--keywords]")),
        },
        "keyword" => {
            if rest.is_empty() {
                return Err(CliError::Usage("lexis keyword <text>..."));
            }
            Ok(keyword(rest))
        }
        "negate" => match rest {
            [operator] => negate(operator),
            _ => Err(CliError::Usage("lexis negate <operator>")),
        },
        "pos" => {
            if rest.is_empty() {
                return Err(CliError::Usage("lexis pos <raw>..."));
            }
            pos(rest)
        }
        "synth" => {
            if rest.is_empty() {
                return Err(CliError::Usage("lexis synth <offset>..."));
            }
            synth(rest)
        }
        "help" | "--help" | "-h" => Ok(USAGE.to_string()),
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}
