use crate::commands::find::USAGE;
use crate::error::ParseError;
use crate::model::NameFilter;

pub fn parse(args: &str) -> Result<NameFilter, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::invalid_format(USAGE));
    }
    Ok(NameFilter::new(keywords))
}
