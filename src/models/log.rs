use super::field::Field;
use super::record::MaintenanceRecord;

/// Ordered collection of records; order is append order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceLog {
    records: Vec<MaintenanceRecord>,
}

impl MaintenanceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column schema of every log, in persisted order.
    pub fn columns(&self) -> &'static [Field] {
        &Field::ALL
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MaintenanceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MaintenanceRecord> {
        self.records.iter()
    }

    pub(crate) fn push(&mut self, record: MaintenanceRecord) {
        self.records.push(record);
    }
}

impl From<Vec<MaintenanceRecord>> for MaintenanceLog {
    fn from(records: Vec<MaintenanceRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<MaintenanceRecord> for MaintenanceLog {
    fn from_iter<I: IntoIterator<Item = MaintenanceRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MaintenanceLog {
    type Item = &'a MaintenanceRecord;
    type IntoIter = std::slice::Iter<'a, MaintenanceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
