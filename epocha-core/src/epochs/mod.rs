//! Epoch utilities: detection from samples and intersection across signals.
//!
//! Modules include:
//! - `detect`: run-length scan turning a sample sequence into epochs
//! - `intersect`: coordinate sweep combining conditions into joint epochs
//! - `sequence`: validated sample sequences and ordering checks
//! - `collate`: assemble paginated records into a sample sequence
/// Page collation for one channel.
pub mod collate;
/// Epoch detection from samples.
pub mod detect;
/// Multiway epoch intersection.
pub mod intersect;
/// Validated sample sequences.
pub mod sequence;
