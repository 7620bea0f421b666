use nutype::nutype;

pub const MAX_NAMESPACE_LENGTH: usize = 128;

pub const DEFAULT_NAMESPACE: &str = "autocomplete";

/// Caller-assigned entry identifier, unique within a namespace.
///
/// Ids are opaque: no trimming or case folding is applied, and any character
/// is allowed since the composite-key codec escapes its separator.
#[nutype(
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EntryId(String);

/// Partition key isolating independent datasets that share one backend.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_NAMESPACE_LENGTH),
    default = DEFAULT_NAMESPACE,
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Default,
        Serialize,
        Deserialize,
    )
)]
pub struct Namespace(String);
