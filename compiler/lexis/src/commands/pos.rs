//! Source position commands.

use lexis_pos::{PosRegion, SourcePos, TokenPos};

use crate::CliError;

/// Classify raw positions: region, rendering and, for real and synthetic
/// positions, the raw value of the counterpart encoding.
#[tracing::instrument(level = "debug", skip_all, fields(count = args.len()))]
pub fn pos(args: &[String]) -> Result<String, CliError> {
    let mut lines = Vec::with_capacity(args.len());
    for arg in args {
        let raw: isize = arg
            .parse()
            .map_err(|_| CliError::InvalidNumber(arg.clone()))?;
        let pos = TokenPos::from_raw(raw)?;
        let counterpart = match pos.region() {
            PosRegion::Real => format!("synthetic {}", pos.to_synthetic().raw()),
            PosRegion::Synthetic => format!("real {}", pos.from_synthetic().raw()),
            PosRegion::Classifying | PosRegion::NoSource => "-".to_string(),
        };
        lines.push(format!(
            "{raw:>12}  {:<12} {:<28} {counterpart}",
            pos.region().name(),
            SourcePos::decode(pos).to_string()
        ));
    }
    Ok(lines.join("\n"))
}

/// Encode source offsets as synthetic positions.
#[tracing::instrument(level = "debug", skip_all, fields(count = args.len()))]
pub fn synth(args: &[String]) -> Result<String, CliError> {
    let mut lines = Vec::with_capacity(args.len());
    for arg in args {
        let offset: usize = arg
            .parse()
            .map_err(|_| CliError::InvalidNumber(arg.clone()))?;
        let synthetic = TokenPos::real(offset)?.to_synthetic();
        lines.push(format!("{offset} -> {}", synthetic.raw()));
    }
    Ok(lines.join("\n"))
}
