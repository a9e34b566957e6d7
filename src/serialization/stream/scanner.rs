/*!
 * Incremental JSON Document Scanner
 *
 * Finds where the first complete JSON document ends while bytes arrive in
 * arbitrary chunks. Structure only: containers are balanced, strings and
 * escapes are skipped, bare scalars end at whitespace, a delimiter or EOF.
 * Validation is left to the engine that decodes the bounded slice.
 */

use crate::core::limits::UTF8_BOM;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Leading,
    Container,
    InString { escaped: bool, top_level: bool },
    Scalar,
    Complete(usize),
}

#[derive(Debug, Clone)]
pub struct DocumentScanner {
    state: State,
    depth: usize,
    consumed: usize,
}

impl Default for DocumentScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentScanner {
    pub const fn new() -> Self {
        Self {
            state: State::Leading,
            depth: 0,
            consumed: 0,
        }
    }

    /// Feed the next chunk; returns the absolute end offset once a document is complete
    pub fn feed(&mut self, chunk: &[u8]) -> Option<usize> {
        if let State::Complete(end) = self.state {
            return Some(end);
        }

        for (idx, &byte) in chunk.iter().enumerate() {
            let pos = self.consumed + idx;
            self.state = match self.state {
                State::Leading => match byte {
                    b' ' | b'\t' | b'\n' | b'\r' => State::Leading,
                    _ if pos < UTF8_BOM.len() && byte == UTF8_BOM[pos] => State::Leading,
                    b'{' | b'[' => {
                        self.depth = 1;
                        State::Container
                    }
                    b'"' => State::InString {
                        escaped: false,
                        top_level: true,
                    },
                    _ => State::Scalar,
                },
                State::Container => match byte {
                    b'"' => State::InString {
                        escaped: false,
                        top_level: false,
                    },
                    b'{' | b'[' => {
                        self.depth += 1;
                        State::Container
                    }
                    b'}' | b']' => {
                        self.depth -= 1;
                        if self.depth == 0 {
                            State::Complete(pos + 1)
                        } else {
                            State::Container
                        }
                    }
                    _ => State::Container,
                },
                State::InString { escaped: true, top_level } => State::InString {
                    escaped: false,
                    top_level,
                },
                State::InString { escaped: false, top_level } => match byte {
                    b'\\' => State::InString {
                        escaped: true,
                        top_level,
                    },
                    b'"' if top_level => State::Complete(pos + 1),
                    b'"' => State::Container,
                    _ => State::InString {
                        escaped: false,
                        top_level,
                    },
                },
                State::Scalar => match byte {
                    b' ' | b'\t' | b'\n' | b'\r' | b'{' | b'}' | b'[' | b']' | b',' | b'"' => {
                        State::Complete(pos)
                    }
                    _ => State::Scalar,
                },
                State::Complete(end) => State::Complete(end),
            };

            if let State::Complete(end) = self.state {
                return Some(end);
            }
        }

        self.consumed += chunk.len();
        None
    }

    /// End of stream reached; a bare scalar is complete at EOF
    pub fn finish(&self) -> Option<usize> {
        match self.state {
            State::Complete(end) => Some(end),
            State::Scalar => Some(self.consumed),
            _ => None,
        }
    }
}
