use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug)]
pub struct CliErr(pub String);

impl fmt::Display for CliErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for CliErr {}

pub fn parse_arg_required<T: FromStr>(args: &mut impl Iterator<Item = String>, field_name: &str) -> Result<T, Box<dyn Error>> {
    args.next()
        .ok_or_else(|| Box::new(CliErr(format!("missing required argument: {field_name}"))) as Box<dyn Error>)?
        .parse()
        .map_err(|_| Box::new(CliErr(format!("could not parse argument: {field_name}"))) as Box<dyn Error>)
}

pub fn parse_arg_optional<T: FromStr + Clone>(args: &mut impl Iterator<Item = String>, default: T) -> T {
    args.next().and_then(|s| s.parse().ok()).unwrap_or(default)
}
