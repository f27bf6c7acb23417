use crate::analytics::record::EmployeeRecord;
use std::io::Read;

#[derive(Debug)]
pub(crate) struct RawTable {
    pub(crate) headers: Vec<String>,
    pub(crate) records: Vec<EmployeeRecord>,
}

pub(crate) fn parse_table<R: Read>(reader: R) -> Result<RawTable, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        records.push(EmployeeRecord::from_pairs(
            headers.iter().cloned().zip(row.iter()),
        ));
    }

    Ok(RawTable { headers, records })
}

fn normalize_header(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "").trim().to_string()
}
