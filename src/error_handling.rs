use std::path::PathBuf;
use std::fmt::Display;

pub trait ErrorType: Display {}

// Where an error happened. An empty file means the grammar came from memory,
// a line of 0 means the error is not tied to a single line.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize
}

#[cfg(test)]
impl Location {
    pub fn line(line: usize) -> Self {
        Location {
            file: PathBuf::new(),
            line
        }
    }
}

impl Location {
    pub fn is_unknown(&self) -> bool {
        self.file.as_os_str().is_empty() && self.line == 0
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.file.as_os_str().is_empty(), self.line) {
            (true, line) => write!(f, "line {}", line),
            (false, 0) => write!(f, "{}", self.file.display()),
            (false, line) => write!(f, "{}:{}", self.file.display(), line),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub location: Location,
    pub error: T
}

impl<T: ErrorType> Error<T> {
    pub fn unlocated(error: T) -> Self {
        Error {
            location: Location::default(),
            error
        }
    }
}

impl<T: ErrorType> Display for Error<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.location.is_unknown() {
            write!(f, "\x1b[31;49;1m[error]\x1b[39;49;1m  {}\x1b[0m", self.error)
        } else {
            write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.location, self.error)
        }
    }
}

pub type Errors<T> = Vec<Error<T>>;
