pub mod alphabet;
pub mod codon_table;

pub use alphabet::{sample, NUCLEOTIDES, TEXT_SYMBOLS};
pub use codon_table::{decode, translate, Protein, Residue};
