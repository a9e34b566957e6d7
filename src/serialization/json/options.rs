/*!
 * JSON Codec Options
 * Immutable configuration held by every JSON adapter for its lifetime
 */

use crate::core::limits::DEFAULT_MAX_STREAM_BYTES;
use crate::serialization::naming::{FieldRules, NamingPolicy};

/// JSON adapter configuration
///
/// Plain data; construct with the `const` builders or start from an adapter's
/// `RECOMMENDED` preset. Nothing is validated at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JsonOptions {
    /// Native-to-wire field naming
    pub naming: NamingPolicy,
    /// Accept wire keys that differ from the expected name only by ASCII case
    pub case_insensitive: bool,
    /// Skip struct fields that serialize to `null`
    pub omit_null_fields: bool,
    /// Pretty-print with two-space indentation
    pub indented: bool,
    /// Upper bound on bytes read from a stream for one document
    pub max_stream_bytes: usize,
}

impl JsonOptions {
    /// camelCase, compact, case-sensitive
    pub const CAMEL_CASE: JsonOptions = JsonOptions {
        naming: NamingPolicy::CamelCase,
        case_insensitive: false,
        omit_null_fields: false,
        indented: false,
        max_stream_bytes: DEFAULT_MAX_STREAM_BYTES,
    };

    /// Field names go to the wire untouched
    pub const PRESERVE: JsonOptions = JsonOptions {
        naming: NamingPolicy::Preserve,
        ..Self::CAMEL_CASE
    };

    pub const fn with_naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = naming;
        self
    }

    pub const fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    pub const fn omit_null_fields(mut self, enabled: bool) -> Self {
        self.omit_null_fields = enabled;
        self
    }

    pub const fn indented(mut self, enabled: bool) -> Self {
        self.indented = enabled;
        self
    }

    pub const fn max_stream_bytes(mut self, limit: usize) -> Self {
        self.max_stream_bytes = limit;
        self
    }

    /// Field mapping rules derived from these options
    #[inline]
    pub const fn field_rules(&self) -> FieldRules {
        FieldRules {
            naming: self.naming,
            case_insensitive: self.case_insensitive,
            omit_nulls: self.omit_null_fields,
        }
    }
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self::CAMEL_CASE
    }
}
