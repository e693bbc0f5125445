use std::fmt;

/// One column of the maintenance log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Date,
    Category,
    Equipment,
    Task,
    Technician,
    Status,
    Priority,
    Notes,
}

impl Field {
    pub const COUNT: usize = 8;

    /// Persisted column order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::Date,
        Field::Category,
        Field::Equipment,
        Field::Task,
        Field::Technician,
        Field::Status,
        Field::Priority,
        Field::Notes,
    ];

    /// Header name as written in the data file.
    pub fn header(&self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::Category => "Category",
            Field::Equipment => "Equipment",
            Field::Task => "Task",
            Field::Technician => "Technician",
            Field::Status => "Status",
            Field::Priority => "Priority",
            Field::Notes => "Notes",
        }
    }

    pub fn headers() -> Vec<&'static str> {
        Self::ALL.iter().map(Field::header).collect()
    }

    /// Exact (case-sensitive) lookup used when reading a file header.
    pub fn from_header(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.header() == s.trim())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
