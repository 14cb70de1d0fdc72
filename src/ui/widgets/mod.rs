// src/ui/widgets/mod.rs

pub mod footer;       // Key help for the current state.
pub mod input;        // Domain field and scan category selector.
pub mod notification; // Transient warning / error line.
pub mod results;      // Result cards, spinner and hints.
