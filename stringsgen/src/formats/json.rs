//! Support for flat JSON string tables: `{"key": "format string", ...}`.
//!
//! Pairs are yielded sorted by key, so output does not depend on how the
//! object happened to be written.

use std::collections::BTreeMap;
use std::io::BufRead;

use crate::{error::Error, traits::Parser};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    pub strings: BTreeMap<String, String>,
}

impl Parser for Format {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let strings = serde_json::from_reader(reader)?;
        Ok(Format { strings })
    }

    fn into_pairs(self) -> Vec<(String, String)> {
        self.strings.into_iter().collect()
    }
}
