//! Shared path-code types and helpers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Marker that opens every path code.
pub const ROOT_MARKER: char = 'r';

/// Step character for a left descent.
pub const LEFT_STEP: char = '0';

/// Step character for a right descent.
pub const RIGHT_STEP: char = '1';

/// Code returned by [`crate::EncryptionTree::encrypt`] for elements that are not in the tree.
pub const NOT_FOUND_CODE: &str = "?";

/// Direction of a single descent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Towards smaller elements.
    Left,
    /// Towards greater elements.
    Right,
}

impl Side {
    /// Path-code character for this step.
    #[must_use]
    pub const fn step_char(self) -> char {
        match self {
            Self::Left => LEFT_STEP,
            Self::Right => RIGHT_STEP,
        }
    }

    const fn from_step_char(c: char) -> Option<Self> {
        match c {
            LEFT_STEP => Some(Self::Left),
            RIGHT_STEP => Some(Self::Right),
            _ => None,
        }
    }
}

/// Errors produced when parsing a path code.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathCodeError {
    /// The code is the empty string.
    #[error("Path code is empty")]
    Empty,

    /// The code does not start with the root marker.
    #[error("Path code must start with '{ROOT_MARKER}', found '{0}'")]
    MissingRootMarker(char),

    /// A step character other than `0` or `1` was found.
    #[error("Invalid step '{step}' at offset {offset}")]
    InvalidStep {
        /// The offending character.
        step: char,
        /// Character offset within the code.
        offset: usize,
    },
}

/// A validated descent path from the root of a tree to one of its nodes.
///
/// The textual form is the root marker `r` followed by one `0` per left step
/// and one `1` per right step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathCode {
    steps: Vec<Side>,
}

impl PathCode {
    /// The code of the root itself.
    #[must_use]
    pub const fn root() -> Self {
        Self { steps: Vec::new() }
    }

    /// Build a code from explicit steps.
    #[must_use]
    pub const fn from_steps(steps: Vec<Side>) -> Self {
        Self { steps }
    }

    /// Steps below the root.
    #[must_use]
    pub fn steps(&self) -> &[Side] {
        &self.steps
    }

}

impl fmt::Display for PathCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;

        f.write_char(ROOT_MARKER)?;
        for side in &self.steps {
            f.write_char(side.step_char())?;
        }
        Ok(())
    }
}

impl FromStr for PathCode {
    type Err = PathCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match chars.next() {
            None => return Err(PathCodeError::Empty),
            Some(ROOT_MARKER) => {}
            Some(other) => return Err(PathCodeError::MissingRootMarker(other)),
        }

        let steps = chars
            .enumerate()
            .map(|(index, step)| {
                Side::from_step_char(step).ok_or(PathCodeError::InvalidStep {
                    step,
                    offset: index.saturating_add(1),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_code_is_marker_only() {
        assert_eq!(PathCode::root().to_string(), "r");
        assert_eq!("r".parse::<PathCode>(), Ok(PathCode::root()));
    }

    #[test]
    fn parses_steps() {
        let code: PathCode = "r0110".parse().expect("valid code");
        assert_eq!(
            code.steps(),
            &[Side::Left, Side::Right, Side::Right, Side::Left]
        );
        assert_eq!(code.to_string(), "r0110");
    }

    #[test]
    fn rejects_malformed_codes() {
        assert_eq!("".parse::<PathCode>(), Err(PathCodeError::Empty));
        assert_eq!(
            "01".parse::<PathCode>(),
            Err(PathCodeError::MissingRootMarker('0'))
        );
        assert_eq!(
            "r0r".parse::<PathCode>(),
            Err(PathCodeError::InvalidStep {
                step: 'r',
                offset: 2
            })
        );
        assert_eq!(
            "?".parse::<PathCode>(),
            Err(PathCodeError::MissingRootMarker('?'))
        );
    }
}
