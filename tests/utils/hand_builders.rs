// ============================================================================
// Input File Builder
// ============================================================================

/// Builds input files one `Name:Card,...` line at a time.
pub struct HandsBuilder {
    lines: Vec<String>,
}

impl HandsBuilder {
    pub fn new() -> Self {
        Self { lines: vec![] }
    }

    pub fn with_hand(mut self, name: &str, cards: &[&str]) -> Self {
        self.lines.push(format!("{}:{}", name, cards.join(",")));
        self
    }

    #[allow(dead_code)]
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(self) -> String {
        let mut contents = self.lines.join("\n");
        contents.push('\n');
        contents
    }
}
