/// A four-digit PIN. `Debug` never prints the digits.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    pub const LENGTH: usize = 4;

    /// Trims surrounding whitespace; `None` unless exactly four ASCII digits remain.
    pub fn new(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.len() == Self::LENGTH && raw.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(raw.to_owned()))
        } else {
            None
        }
    }

    pub fn matches(&self, candidate: &Pin) -> bool {
        self.0 == candidate.0
    }
}

impl core::fmt::Debug for Pin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Pin(****)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolderName(String);

impl HolderName {
    pub fn new(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for HolderName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
