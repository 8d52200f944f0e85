//! Decoding real-shaped level blobs end to end: Base64 → inflate → parse.

use gdlink_codec::{Base64Flavor, PropertyValue, decode_level, decode_level_async};

/// gzip-framed, service Base64, as served by the level download endpoint.
const GZIP_LEVEL: &str = include_str!("fixtures/level_gzip.txt");

/// The same level, zlib-framed, platform-standard Base64.
const ZLIB_LEVEL: &str = include_str!("fixtures/level_zlib_standard.txt");

/// Object count the fixtures were generated with.
const EXPECTED_OBJECTS: usize = 12;

#[test]
fn test_decode_level_gzip_fixture() {
    let level = decode_level(GZIP_LEVEL, Base64Flavor::Service).expect("fixture decodes");

    assert_eq!(level.objects.len(), EXPECTED_OBJECTS);
    assert_eq!(level.header.get("kA13"), Some("0"));

    let channels = level.color_channels();
    assert_eq!(channels.len(), 3);
    let ids: Vec<&str> = channels.iter().filter_map(|c| c.get("6")).collect();
    assert_eq!(ids, vec!["1000", "1001", "1004"]);
}

#[test]
fn test_decode_level_zlib_standard_fixture_matches_gzip() {
    let gzip = decode_level(GZIP_LEVEL, Base64Flavor::Service).unwrap();
    let zlib = decode_level(ZLIB_LEVEL, Base64Flavor::Standard).unwrap();
    assert_eq!(gzip, zlib);
}

#[test]
fn test_decode_level_object_properties() {
    let level = decode_level(GZIP_LEVEL, Base64Flavor::Service).unwrap();

    let first = &level.objects[0];
    assert_eq!(first.number(1), Some(1.0));
    assert_eq!(first.number(2), Some(15.0));
    assert_eq!(first.number(6), Some(90.0));

    // Every fourth object carries a text property.
    assert_eq!(
        level.objects[3].get(31),
        Some(&PropertyValue::Text("aGVsbG8=".into()))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_decode_level_async_offloaded_matches_sync() {
    let sync = decode_level(GZIP_LEVEL, Base64Flavor::Service).unwrap();
    let offloaded = decode_level_async(GZIP_LEVEL, Base64Flavor::Service, 0)
        .await
        .unwrap();
    assert_eq!(sync, offloaded);
}
