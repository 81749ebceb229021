use super::util::parse_index;
use crate::commands::delete::USAGE;
use crate::error::ParseError;
use crate::index::Index;

pub fn parse(args: &str) -> Result<Index, ParseError> {
    parse_index(args).map_err(|_| ParseError::invalid_format(USAGE))
}
