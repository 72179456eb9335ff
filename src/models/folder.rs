use super::record::AttendanceRecord;

/// A named bucket of attendance records (one service, one event...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    name: String,
    records: Vec<AttendanceRecord>,
}

impl Folder {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            records: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records in arrival order.
    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn push(&mut self, record: AttendanceRecord) {
        self.records.push(record);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<AttendanceRecord> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }
}
