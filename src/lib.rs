//! Decoder for the tagged property records stored in game save files.

/// Property records, array decoding, struct registry, and host binding.
pub mod prop;
