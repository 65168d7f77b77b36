/// Result of a mutating roster operation.
///
/// NotFound and validation cases are reported here with a user-facing reason
/// instead of raising an error; `Err(AppError)` is reserved for I/O and
/// database failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied(String),
    Rejected(String),
}

impl Outcome {
    pub fn applied<S: Into<String>>(msg: S) -> Self {
        Outcome::Applied(msg.into())
    }

    pub fn rejected<S: Into<String>>(msg: S) -> Self {
        Outcome::Rejected(msg.into())
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Applied(m) | Outcome::Rejected(m) => m,
        }
    }
}
