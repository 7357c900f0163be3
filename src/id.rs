/// Monotonic ID generator. Never hands out the same number twice.
#[derive(Debug)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Next id rendered as `<prefix>_<6-digit number>`, e.g. `run_000001`.
    /// Zero padding keeps lexical order equal to issue order.
    pub fn next_tagged(&mut self, prefix: &str) -> String {
        format!("{prefix}_{:06}", self.next_id())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
