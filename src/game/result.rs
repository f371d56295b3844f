use std::fmt;

/// The outcome of one run: the leading player, anyone tied with them, and
/// the shared face total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerResult {
    pub winner: String,
    pub tied: Vec<String>,
    pub face_total: u32,
}

impl WinnerResult {
    /// Encodes as `Winner[,Tied...]:FaceTotal`.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WinnerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.winner)?;
        for name in &self.tied {
            write!(f, ",{}", name)?;
        }
        write!(f, ":{}", self.face_total)
    }
}
