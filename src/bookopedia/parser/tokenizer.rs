//! Splits command arguments into a preamble and per-prefix values.
//!
//! ```text
//! "1 n/Amy Bee p/911 t/Shopee t/Lazada"
//!  ^ ^-------- ^---- ^------- ^-------
//!  |    name   phone  parcel   parcel
//!  preamble
//! ```
//!
//! A prefix only counts when it starts the string or follows whitespace, so
//! `a/b` inside a value such as `n/ab/cd` is left alone. Each value runs up
//! to the next recognised prefix (or the end) and is trimmed.
//!
//! Tokenizing keeps *every* occurrence of every prefix in input order. How
//! repeats are reduced is the caller's choice: [`ArgumentMultimap::value`]
//! takes the last one, [`ArgumentMultimap::all_values`] takes them all.

use super::syntax::Prefix;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognised prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order. Empty if never given.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map_or(&[], Vec::as_slice)
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }
}

pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| prefix_positions(args, prefix))
        .collect();
    positions.sort_by_key(|&(pos, _)| pos);

    let preamble_end = positions.first().map_or(args.len(), |&(pos, _)| pos);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, &(pos, prefix)) in positions.iter().enumerate() {
        let start = pos + prefix.len();
        let end = positions.get(i + 1).map_or(args.len(), |&(next, _)| next);
        map.values
            .entry(prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }

    map
}

fn prefix_positions(args: &str, prefix: Prefix) -> impl Iterator<Item = (usize, Prefix)> + '_ {
    args.match_indices(prefix.as_str())
        .filter(move |&(pos, _)| {
            args[..pos]
                .chars()
                .next_back()
                .is_none_or(char::is_whitespace)
        })
        .map(move |(pos, _)| (pos, prefix))
}
