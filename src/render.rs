//! # Rendering
//! The textual rendering back-end is an external collaborator (spec.md
//! §1/§6): the core only knows about the [`ChunkSink`] trait. `StdoutSink`
//! is the default, line-oriented implementation `main.rs` wires in;
//! `CollectingSink` (test-only) lets tests assert on exact output without
//! capturing process stdout.

/// Receives one event per completed chunk (or per failure) as the parser
/// works through a stream. Implementations must not block indefinitely —
/// the parser calls back into the sink synchronously, in stream order.
pub trait ChunkSink {
    /// A chunk was fully validated; `description` is a ready-to-print,
    /// human-readable summary (exact wording is not part of the contract,
    /// spec.md §6 — only the rule violated on failure is).
    fn chunk(&mut self, description: &str);

    /// A non-fatal advisory message (currently unused by the core, which
    /// is fail-fast, but kept so a sink can distinguish "chunk description"
    /// from "everything else" if a future caller wants to surface
    /// warnings without aborting).
    fn note(&mut self, message: &str) {
        let _ = message;
    }
}

/// Writes chunk descriptions to stdout, one line each.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ChunkSink for StdoutSink {
    fn chunk(&mut self, description: &str) {
        println!("{description}");
    }

    fn note(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// Records every line it receives, for assertions in tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub lines: Vec<String>,
    pub notes: Vec<String>,
}

impl ChunkSink for CollectingSink {
    fn chunk(&mut self, description: &str) {
        self.lines.push(description.to_string());
    }

    fn note(&mut self, message: &str) {
        self.notes.push(message.to_string());
    }
}
