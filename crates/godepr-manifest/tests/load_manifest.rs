use godepr_manifest::{ManifestError, fuzz, parse_packages, read_packages};
use proptest::prelude::*;
use std::fs::File;
use std::io::Write;

const GO_LIST_OUTPUT: &str = r#"{
	"Dir": "/home/dev/shop/internal/domain",
	"ImportPath": "example.com/shop/internal/domain",
	"Name": "domain",
	"Root": "/home/dev/shop",
	"Module": {
		"Path": "example.com/shop",
		"Main": true
	},
	"GoFiles": [
		"order.go"
	],
	"Imports": [
		"errors",
		"example.com/shop/internal/infrastructure/db",
		"time"
	],
	"Deps": [
		"errors",
		"example.com/shop/internal/infrastructure/db",
		"internal/abi",
		"time"
	]
}
{
	"Dir": "/home/dev/shop/internal/infrastructure/db",
	"ImportPath": "example.com/shop/internal/infrastructure/db",
	"Name": "db",
	"Imports": [
		"database/sql"
	]
}
{
	"Dir": "/home/dev/shop/cmd/shop",
	"ImportPath": "example.com/shop/cmd/shop",
	"Name": "main"
}
"#;

#[test]
fn reads_go_list_output_from_file() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let path = tmp.path().join("packages.json");
    File::create(&path)
        .and_then(|mut f| f.write_all(GO_LIST_OUTPUT.as_bytes()))
        .expect("write listing");

    let packages = read_packages(File::open(&path).expect("open listing")).expect("decode");

    assert_eq!(packages.len(), 3);
    assert_eq!(packages[0].import_path, "example.com/shop/internal/domain");
    assert_eq!(packages[0].dir, "/home/dev/shop/internal/domain");
    assert_eq!(packages[0].imports.len(), 3);
    assert_eq!(packages[0].deps.len(), 4);
    assert_eq!(packages[1].imports, vec!["database/sql"]);
    assert!(packages[2].imports.is_empty());
}

#[test]
fn file_and_text_decoding_agree() {
    let from_text = parse_packages(GO_LIST_OUTPUT).expect("decode text");
    let from_reader = read_packages(GO_LIST_OUTPUT.as_bytes()).expect("decode reader");
    assert_eq!(from_text, from_reader);
}

#[test]
fn malformed_error_message_names_the_record() {
    let err = parse_packages("{invalid}").unwrap_err();
    assert!(matches!(err, ManifestError::Malformed { .. }));
    assert!(err.to_string().contains("package record 0"));
}

proptest! {
    #[test]
    fn decoding_never_panics(text in ".{0,256}") {
        let _ = fuzz::parse_stream(&text);
    }

    #[test]
    fn whitespace_only_input_is_empty(text in "[ \t\r\n]{0,32}") {
        prop_assert_eq!(fuzz::parse_stream(&text).unwrap(), 0);
    }
}
