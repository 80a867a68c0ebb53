use std::fmt;

/// Card details carried on the request path only.
///
/// A `Card` is never stored, logged, or echoed back. Its `Debug` output is redacted
/// so it can sit inside structs that are traced without leaking the PAN or CVV.
#[derive(Clone, PartialEq, Eq)]
pub struct Card {
    number: String,
    cvv: String,
}

impl Card {
    pub fn new(number: impl Into<String>, cvv: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            cvv: cvv.into(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// The rightmost four digits of the card number as an integer (0-9999).
    ///
    /// Only meaningful once the number has passed validation; non-digit bytes are skipped.
    pub fn last_four(&self) -> u16 {
        let bytes = self.number.as_bytes();
        let start = bytes.len().saturating_sub(4);
        bytes[start..]
            .iter()
            .filter(|b| b.is_ascii_digit())
            .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("number", &format_args!("****{:04}", self.last_four()))
            .field("cvv", &"***")
            .finish()
    }
}
