mod binary;

pub use binary::{read_listing, ByteSequence};
