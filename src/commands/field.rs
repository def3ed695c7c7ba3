//! Field Command Set (7)
//!
//! Empty in the JDWP spec: it exists as a command-set number but defines no
//! commands.
