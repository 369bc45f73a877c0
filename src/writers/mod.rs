pub mod records;

pub use records::RecordWriter;
