//! On-disk encoding of [`EntryMeta`]: a version byte followed by postcard.

use lexis_core::{EntryMeta, MatchStrategy};
use redb::TypeName;
use serde::{Deserialize, Serialize};

pub trait MetaVariant {
    const VERSION: u8;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaV1 {
    pub case_sensitive: bool,
    pub strategy: MatchStrategy,
    pub ngram_size: usize,
}

impl MetaVariant for MetaV1 {
    const VERSION: u8 = 1;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionedMeta {
    V1(MetaV1),
}

impl From<EntryMeta> for VersionedMeta {
    fn from(meta: EntryMeta) -> Self {
        VersionedMeta::V1(MetaV1 {
            case_sensitive: meta.case_sensitive,
            strategy: meta.strategy,
            ngram_size: meta.ngram_size,
        })
    }
}

impl From<VersionedMeta> for EntryMeta {
    fn from(meta: VersionedMeta) -> Self {
        match meta {
            VersionedMeta::V1(v1) => EntryMeta {
                case_sensitive: v1.case_sensitive,
                strategy: v1.strategy,
                ngram_size: v1.ngram_size,
            },
        }
    }
}

impl redb::Value for VersionedMeta {
    type SelfType<'a> = VersionedMeta;
    type AsBytes<'a> = Vec<u8>;

    fn fixed_width() -> Option<usize> {
        None
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let (version, data) = data.split_first().expect("empty meta record");
        match *version {
            MetaV1::VERSION => {
                let v1 = postcard::from_bytes::<MetaV1>(data).expect("invalid meta record");
                VersionedMeta::V1(v1)
            }
            version => panic!("unsupported meta version: {}", version),
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        match value {
            VersionedMeta::V1(v1) => postcard::to_extend(v1, vec![MetaV1::VERSION])
                .expect("meta record always serializes"),
        }
    }

    fn type_name() -> TypeName {
        TypeName::new("lexis::EntryMeta")
    }
}
