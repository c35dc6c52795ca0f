use std::fmt;
use std::str::FromStr;

/// Binary operation the command line can dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Self::Add, Self::Subtract, Self::Multiply];

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
        }
    }

    /// Message reported when the operands' shapes do not fit this operation
    pub fn dimension_message(self) -> &'static str {
        match self {
            Self::Add => "Matrices must have the same dimensions for addition",
            Self::Subtract => "Matrices must have the same dimensions for subtraction",
            Self::Multiply => "Invalid dimensions for multiplication",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid operation. Choose from 'add', 'subtract', 'multiply'.")
    }
}

impl std::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "divide".parse::<Operation>().unwrap_err();
        assert_eq!(err, UnknownOperation("divide".to_string()));
        assert_eq!(
            err.to_string(),
            "Invalid operation. Choose from 'add', 'subtract', 'multiply'."
        );
        // Names are case sensitive
        assert!("Add".parse::<Operation>().is_err());
    }
}
