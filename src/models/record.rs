
/// How a record entered its folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOrigin {
    Manual,
    Scan,
}

impl RecordOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordOrigin::Manual => "manual",
            RecordOrigin::Scan => "scan",
        }
    }
}

/// One attendee check-in.
///
/// Fields are private: a record is immutable once stamped, the only
/// mutation allowed is removing it from its folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    name: String,
    date: String,
    time: String,
    cluster: String,
    location: String,
    origin: RecordOrigin,
}

impl AttendanceRecord {
    pub(crate) fn new(
        name: String,
        date: String,
        time: String,
        cluster: String,
        location: String,
        origin: RecordOrigin,
    ) -> Self {
        Self {
            name,
            date,
            time,
            cluster,
            location,
            origin,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn origin(&self) -> RecordOrigin {
        self.origin
    }
}
