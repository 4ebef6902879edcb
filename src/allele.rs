//! The possible values for a single gene
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Standard Allele, suitable for [Genotype](crate::genotype::Genotype).
/// Implemented for the primitives and `String` by default. The `Display`
/// bound feeds the joined string views of a chromosome, the serde bounds the
/// engine snapshots.
pub trait Allele:
    Clone
    + Send
    + Sync
    + PartialEq
    + std::fmt::Debug
    + std::fmt::Display
    + std::hash::Hash
    + Serialize
    + DeserializeOwned
    + 'static
{
}

macro_rules! impl_allele {
    ($($t:ty),*) => {
        $(
            impl Allele for $t {}
        )*
    }
}

impl_allele!(
    bool, char, i128, i16, i32, i64, i8, isize, u128, u16, u32, u64, u8, usize, String
);
