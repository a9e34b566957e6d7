/*!
 * Round-Trip Property Tests
 * deserialize(serialize(v)) == v for every adapter
 */

use content_codec::{
    FastJsonCodec, JsonCodec, JsonOptions, LegacyJsonCodec, NamingPolicy, PlatformJsonCodec,
    QuickXmlCodec, XmlCodec, XmlOptions,
};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Envelope {
    message_id: u64,
    retry_count: i32,
    subject_line: String,
    recipient_ids: Vec<u32>,
    is_urgent: Option<bool>,
    headers: BTreeMap<String, String>,
    attempts_by_hop: BTreeMap<u32, i64>,
    offsets: BTreeMap<i16, Kind>,
    kind: Kind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Kind {
    Plain,
    Reply(u64),
    Forward { original_id: u64, hop_count: u8 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Record {
    record_id: u32,
    owner: String,
    active: bool,
}

fn kind_strategy() -> impl Strategy<Value = Kind> {
    prop_oneof![
        Just(Kind::Plain),
        any::<u64>().prop_map(Kind::Reply),
        (any::<u64>(), any::<u8>()).prop_map(|(original_id, hop_count)| Kind::Forward {
            original_id,
            hop_count
        }),
    ]
}

prop_compose! {
    fn envelope_strategy()(
        message_id in any::<u64>(),
        retry_count in any::<i32>(),
        subject_line in "\\PC{0,40}",
        recipient_ids in prop::collection::vec(any::<u32>(), 0..16),
        is_urgent in any::<Option<bool>>(),
        headers in prop::collection::btree_map("[a-z_]{1,12}", "\\PC{0,16}", 0..4),
        attempts_by_hop in prop::collection::btree_map(any::<u32>(), any::<i64>(), 0..4),
        offsets in prop::collection::btree_map(any::<i16>(), kind_strategy(), 0..3),
        kind in kind_strategy(),
    ) -> Envelope {
        Envelope {
            message_id,
            retry_count,
            subject_line,
            recipient_ids,
            is_urgent,
            headers,
            attempts_by_hop,
            offsets,
            kind,
        }
    }
}

fn naming_strategy() -> impl Strategy<Value = NamingPolicy> {
    prop_oneof![
        Just(NamingPolicy::Preserve),
        Just(NamingPolicy::CamelCase),
        Just(NamingPolicy::PascalCase),
        Just(NamingPolicy::SnakeCase),
        Just(NamingPolicy::KebabCase),
        Just(NamingPolicy::ScreamingSnakeCase),
    ]
}

fn round_trip<C: JsonCodec>(codec: &C, value: &Envelope) -> Result<(), TestCaseError> {
    let bytes = codec
        .serialize_to_bytes(value)
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    let back: Envelope = codec
        .deserialize_bytes(&bytes)
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert_eq!(&back, value);

    let text = codec
        .serialize_to_string(value)
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    let back: Envelope = codec
        .deserialize_text(&text)
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert_eq!(&back, value);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_fast_round_trip(value in envelope_strategy()) {
        round_trip(&FastJsonCodec::default(), &value)?;
    }

    #[test]
    fn prop_platform_round_trip(value in envelope_strategy()) {
        round_trip(&PlatformJsonCodec::default(), &value)?;
    }

    #[test]
    fn prop_legacy_round_trip(value in envelope_strategy()) {
        round_trip(&LegacyJsonCodec::default(), &value)?;
    }

    #[test]
    fn prop_round_trip_under_any_policy(
        value in envelope_strategy(),
        naming in naming_strategy(),
        indented in any::<bool>(),
        omit_nulls in any::<bool>(),
    ) {
        let options = JsonOptions::CAMEL_CASE
            .with_naming(naming)
            .indented(indented)
            .omit_null_fields(omit_nulls);
        round_trip(&FastJsonCodec::new(options), &value)?;
        round_trip(&PlatformJsonCodec::new(options), &value)?;
        round_trip(&LegacyJsonCodec::new(options), &value)?;
    }

    #[test]
    fn prop_xml_round_trip(
        record_id in any::<u32>(),
        owner in "[A-Za-z0-9]{1,24}",
        active in any::<bool>(),
        indented in any::<bool>(),
    ) {
        let record = Record { record_id, owner, active };
        let options = if indented { XmlOptions::INDENTED } else { XmlOptions::COMPACT };
        let codec = QuickXmlCodec::new(options);

        let bytes = codec.serialize(&record).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let back: Record = codec
            .deserialize_bytes(&bytes)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(back, record);
    }
}
