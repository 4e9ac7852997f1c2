//! Status codes returned by the device

use std::fmt;

/// Result code of a status-load request
///
/// Zero means the device answered and the client's cached properties were
/// refreshed. Any other value means the device answered without usable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusCode(i32);

impl StatusCode {
    /// The success code
    pub const OK: StatusCode = StatusCode(0);

    /// Wrap a raw code
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Raw code value
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Whether this is the success code
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for StatusCode {
    fn from(code: i32) -> Self {
        StatusCode::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(1, false)]
    #[case(-1, false)]
    #[case(255, false)]
    fn test_is_success(#[case] raw: i32, #[case] expected: bool) {
        assert_eq!(StatusCode::from(raw).is_success(), expected);
    }

    #[test]
    fn test_default_is_ok() {
        assert_eq!(StatusCode::default(), StatusCode::OK);
    }
}
