use std::fmt;

#[derive(Debug, Clone)]
pub enum VisitError {
    StorageOperation(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
    DateParse(String),
    Workbook(String),
    StorageBackendNotFound(String),
}

impl VisitError {
    pub fn code(&self) -> &'static str {
        match self {
            VisitError::StorageOperation(_) => "E001",
            VisitError::FileOperation(_) => "E002",
            VisitError::Validation(_) => "E003",
            VisitError::NotFound(_) => "E004",
            VisitError::Serialization(_) => "E005",
            VisitError::DateParse(_) => "E006",
            VisitError::Workbook(_) => "E007",
            VisitError::StorageBackendNotFound(_) => "E008",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            VisitError::StorageOperation(_) => "Storage Operation Error",
            VisitError::FileOperation(_) => "File Operation Error",
            VisitError::Validation(_) => "Validation Error",
            VisitError::NotFound(_) => "Resource Not Found",
            VisitError::Serialization(_) => "Serialization Error",
            VisitError::DateParse(_) => "Date Parse Error",
            VisitError::Workbook(_) => "Workbook Generation Error",
            VisitError::StorageBackendNotFound(_) => "Storage Backend Not Found",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            VisitError::StorageOperation(msg) => msg,
            VisitError::FileOperation(msg) => msg,
            VisitError::Validation(msg) => msg,
            VisitError::NotFound(msg) => msg,
            VisitError::Serialization(msg) => msg,
            VisitError::DateParse(msg) => msg,
            VisitError::Workbook(msg) => msg,
            VisitError::StorageBackendNotFound(msg) => msg,
        }
    }
}

impl fmt::Display for VisitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for VisitError {}

impl VisitError {
    pub fn storage_operation<T: Into<String>>(msg: T) -> Self {
        VisitError::StorageOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        VisitError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        VisitError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        VisitError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        VisitError::Serialization(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        VisitError::DateParse(msg.into())
    }

    pub fn workbook<T: Into<String>>(msg: T) -> Self {
        VisitError::Workbook(msg.into())
    }

    pub fn storage_backend_not_found<T: Into<String>>(msg: T) -> Self {
        VisitError::StorageBackendNotFound(msg.into())
    }
}

impl From<std::io::Error> for VisitError {
    fn from(err: std::io::Error) -> Self {
        VisitError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for VisitError {
    fn from(err: serde_json::Error) -> Self {
        VisitError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for VisitError {
    fn from(err: chrono::ParseError) -> Self {
        VisitError::DateParse(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for VisitError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        VisitError::Workbook(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VisitError>;
