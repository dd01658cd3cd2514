//! Support for two-column CSV string tables.
//!
//! Each record is `key,value`. A first record that reads exactly `key,value`
//! is treated as a header and skipped.
use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::{error::Error, traits::Parser};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CSVRecord {
    pub key: String,
    pub value: String,
}

impl CSVRecord {
    fn is_header(&self) -> bool {
        self.key.eq_ignore_ascii_case("key") && self.value.eq_ignore_ascii_case("value")
    }
}

impl Parser for Vec<CSVRecord> {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader);
        let mut records = Vec::new();
        for (index, result) in rdr.deserialize().enumerate() {
            let record: CSVRecord = result?;
            if index == 0 && record.is_header() {
                continue;
            }
            records.push(record);
        }
        Ok(records)
    }

    fn into_pairs(self) -> Vec<(String, String)> {
        self.into_iter()
            .map(|record| (record.key, record.value))
            .collect()
    }
}
