use std::path::PathBuf;

use crate::errors::SettingsError;

/// Instructions between two metrics reports
pub const DEFAULT_METRICS_INTERVAL: usize = 1_000_000;

/// Command line run configuration
#[derive(Debug, PartialEq, Eq)]
pub struct RunSettings {
    /// iNES file to run
    pub rom_path: PathBuf,

    /// Stop after this many instructions. Run forever when not set
    pub steps: Option<usize>,

    /// Memory range dumped after the run
    pub dump_range: Option<(u16, u16)>,

    pub metrics_interval: usize,
}

impl RunSettings {
    /// Parse settings from command line arguments (program name excluded)
    ///
    /// `<rom.nes> [--steps N] [--dump START:END] [--metrics-every N]`
    pub fn from_args<I, S>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);

        let mut rom_path = None;
        let mut steps = None;
        let mut dump_range = None;
        let mut metrics_interval = DEFAULT_METRICS_INTERVAL;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--steps" => {
                    let value = value_for(&arg, args.next())?;
                    steps = Some(parse_count(&arg, &value)?);
                }
                "--dump" => {
                    let value = value_for(&arg, args.next())?;
                    dump_range = Some(parse_range(&arg, &value)?);
                }
                "--metrics-every" => {
                    let value = value_for(&arg, args.next())?;
                    metrics_interval = parse_count(&arg, &value)?;
                }
                option if option.starts_with("--") => {
                    return Err(SettingsError::UnknownOption(option.to_string()));
                }
                _ => {
                    rom_path = Some(PathBuf::from(&arg));
                }
            }
        }

        Ok(Self {
            rom_path: rom_path.ok_or(SettingsError::MissingRomPath)?,
            steps,
            dump_range,
            metrics_interval,
        })
    }
}

fn value_for(option: &str, value: Option<String>) -> Result<String, SettingsError> {
    value.ok_or_else(|| SettingsError::MissingValue(option.to_string()))
}

fn invalid(option: &str, value: &str) -> SettingsError {
    SettingsError::InvalidValue {
        option: option.to_string(),
        value: value.to_string(),
    }
}

fn parse_count(option: &str, value: &str) -> Result<usize, SettingsError> {
    match value.parse() {
        Ok(0) | Err(_) => Err(invalid(option, value)),
        Ok(count) => Ok(count),
    }
}

/// `START:END`, both inclusive hex addresses with optional `$` or `0x`
fn parse_range(option: &str, value: &str) -> Result<(u16, u16), SettingsError> {
    let address = |text: &str| {
        let digits = text
            .strip_prefix('$')
            .or_else(|| text.strip_prefix("0x"))
            .unwrap_or(text);
        u16::from_str_radix(digits, 16).map_err(|_| invalid(option, value))
    };

    let (start, end) = value.split_once(':').ok_or_else(|| invalid(option, value))?;
    let (start, end) = (address(start)?, address(end)?);
    if start > end {
        return Err(invalid(option, value));
    }

    Ok((start, end))
}
