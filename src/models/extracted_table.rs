use csv::StringRecord;

/// Header plus the data records of a delimited file, in file order.
#[derive(Debug, Clone, Default)]
pub struct ExtractedTable {
    headers: StringRecord,
    records: Vec<StringRecord>
}

impl ExtractedTable {
    pub fn new(headers: StringRecord, records: Vec<StringRecord>) -> Self {
        Self { headers, records }
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }
}
