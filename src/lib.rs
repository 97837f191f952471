//! Country-name canonicalization.
//!
//! Free text, ISO 3166-1 alpha-2 codes and English/French/Arabic display
//! names all resolve to one uppercase English key suitable for grouping and
//! equality checks across data sources.

pub mod alias;
pub mod canon;
pub mod error;
pub mod lang;
pub mod normalizer;
pub mod process;
pub mod region;
pub mod stage;


pub use alias::AliasTable;
pub use canon::{CanonTable, CanonTableBuilder, build_country_canon, canon_country};
pub use error::CanonError;
pub use lang::{ARA, ENG, FRA, Lang};
pub use normalizer::{KeyNormalizer, normalize};
pub use region::{BundledRegionNames, NoRegionNames, RegionCode, RegionNameResolver};
pub use stage::Stage;
pub use stage::collapse_whitespace::CollapseWhitespace;
pub use stage::remove_diacritics::RemoveDiacritics;
pub use stage::replace_separators::ReplaceSeparators;
pub use stage::strip_arabic_punctuation::StripArabicPunctuation;
pub use stage::trim::Trim;
pub use stage::upper_case::UpperCase;
