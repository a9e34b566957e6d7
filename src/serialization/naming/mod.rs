/*!
 * Field Naming Policies
 *
 * Maps native Rust field names (snake_case) to wire field names and back.
 *
 * Only struct fields are renamed. Serialization intercepts
 * `serialize_struct` / `serialize_struct_variant` while building a
 * `serde_json::Value` tree; deserialization uses the `fields` list serde hands
 * to `deserialize_struct` to match wire keys against the wire form of each
 * declared field. Map keys and enum variant names pass through untouched.
 *
 * Types that already carry `#[serde(rename_all = ...)]` should be paired with
 * `NamingPolicy::Preserve`.
 *
 * Internally tagged (`#[serde(tag = ...)]`) and untagged enums serialize their
 * fields through `serialize_struct` and are renamed on the way out, but serde
 * buffers them through `deserialize_any`, which carries no field list. Their
 * wire keys are never mapped back, so decoding fails with a missing field.
 * Give such enums `#[serde(rename_all_fields = "camelCase")]` (matching the
 * policy) or use `NamingPolicy::Preserve`.
 */

mod de;
mod ser;

use ahash::RandomState;
use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

/// Rule mapping in-memory field names to wire field names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NamingPolicy {
    /// Wire name equals the native name
    Preserve,
    /// `user_name` -> `userName`
    CamelCase,
    /// `user_name` -> `UserName`
    PascalCase,
    /// `UserName` -> `user_name`
    SnakeCase,
    /// `user_name` -> `user-name`
    KebabCase,
    /// `user_name` -> `USER_NAME`
    ScreamingSnakeCase,
}

impl NamingPolicy {
    /// Convert a native field name to its wire form
    pub fn apply(self, native: &str) -> String {
        if self == NamingPolicy::Preserve {
            return native.to_owned();
        }

        let words = split_words(native);
        let mut out = String::with_capacity(native.len() + words.len());
        for (idx, word) in words.iter().enumerate() {
            match self {
                NamingPolicy::Preserve => unreachable!("handled above"),
                NamingPolicy::CamelCase if idx == 0 => push_lower(&mut out, word),
                NamingPolicy::CamelCase | NamingPolicy::PascalCase => push_capitalized(&mut out, word),
                NamingPolicy::SnakeCase | NamingPolicy::KebabCase => {
                    if idx > 0 {
                        out.push(if self == NamingPolicy::KebabCase { '-' } else { '_' });
                    }
                    push_lower(&mut out, word);
                }
                NamingPolicy::ScreamingSnakeCase => {
                    if idx > 0 {
                        out.push('_');
                    }
                    out.extend(word.chars().flat_map(char::to_uppercase));
                }
            }
        }
        out
    }
}

/// Split an identifier on `_`/`-` separators and lower-to-upper case boundaries
fn split_words(name: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let mut prev_lower = false;

    for (idx, ch) in name.char_indices() {
        if ch == '_' || ch == '-' {
            if let Some(begin) = start.take() {
                words.push(&name[begin..idx]);
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower {
            if let Some(begin) = start.take() {
                words.push(&name[begin..idx]);
            }
        }
        start.get_or_insert(idx);
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
    }
    if let Some(begin) = start {
        words.push(&name[begin..]);
    }
    words
}

fn push_lower(out: &mut String, word: &str) {
    out.extend(word.chars().flat_map(char::to_lowercase));
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.extend(chars.flat_map(char::to_lowercase));
    }
}

// ============================================================================
// Wire Name Cache
// ============================================================================

/// Field names are compile-time identifiers, so the set of interned names is bounded.
static WIRE_NAMES: OnceLock<DashMap<(NamingPolicy, &'static str), &'static str, RandomState>> =
    OnceLock::new();

fn wire_names() -> &'static DashMap<(NamingPolicy, &'static str), &'static str, RandomState> {
    WIRE_NAMES.get_or_init(|| DashMap::with_hasher(RandomState::new()))
}

/// How struct fields are mapped between Rust values and wire documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldRules {
    pub naming: NamingPolicy,
    /// Match wire keys to fields ignoring ASCII case when no exact match exists
    pub case_insensitive: bool,
    /// Drop struct fields whose value serializes to `null`
    pub omit_nulls: bool,
}

impl FieldRules {
    /// Rules under which the tree transform changes nothing
    pub const IDENTITY: FieldRules = FieldRules {
        naming: NamingPolicy::Preserve,
        case_insensitive: false,
        omit_nulls: false,
    };

    /// True when values can go straight to the engine without a tree pass
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Wire form of a native field name (memoized)
    pub fn wire_name(&self, native: &'static str) -> &'static str {
        if self.naming == NamingPolicy::Preserve {
            return native;
        }
        let key = (self.naming, native);
        if let Some(cached) = wire_names().get(&key) {
            return *cached;
        }
        let converted: &'static str = Box::leak(self.naming.apply(native).into_boxed_str());
        *wire_names().entry(key).or_insert(converted)
    }

    /// Declared field whose wire form matches `wire`
    pub fn native_field(&self, wire: &str, fields: &'static [&'static str]) -> Option<&'static str> {
        let exact = fields.iter().copied().find(|&f| self.wire_name(f) == wire);
        if exact.is_some() || !self.case_insensitive {
            return exact;
        }
        fields
            .iter()
            .copied()
            .find(|&f| self.wire_name(f).eq_ignore_ascii_case(wire))
    }
}

/// Serialize `value` into a document tree, renaming struct fields per `rules`
pub fn to_value<T>(value: &T, rules: FieldRules) -> Result<Value, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    value.serialize(ser::ValueSerializer::new(rules))
}

/// Deserialize `T` from a document tree, matching wire keys per `rules`
pub fn from_value<T>(value: Value, rules: FieldRules) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned,
{
    T::deserialize(de::ValueDeserializer::new(value, rules))
}
