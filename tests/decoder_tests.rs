use absurdle_dict::{
    decode, expand_category, sample_dictionary, split_suffix_run, Category, CompressedDictionary,
    DecodeError, Error, FlatDictionary, PrefixGroup,
};

fn decode_str(json: &str) -> Result<FlatDictionary, Error> {
    let compressed = CompressedDictionary::from_json_str(json)?;
    Ok(decode(&compressed)?)
}

#[test]
fn test_example_document() {
    let flat = decode_str(r#"{"N": {"ab": "cdexyz"}, "I": {"q": "zzz"}}"#).unwrap();
    assert_eq!(flat.guesses, vec!["qzzz"]);
    assert_eq!(flat.solutions, vec!["abcde", "abxyz"]);
}

#[test]
fn test_example_output_json() {
    let flat = decode_str(r#"{"N": {"ab": "cdexyz"}, "I": {"q": "zzz"}}"#).unwrap();
    assert_eq!(
        flat.to_json_string(false).unwrap(),
        r#"{"guesses":["qzzz"],"solutions":["abcde","abxyz"]}"#
    );
}

#[test]
fn test_malformed_run_names_prefix_and_category() {
    let err = decode_str(r#"{"N": {"ab": "cde"}, "I": {"q": "zz"}}"#).unwrap_err();
    match err {
        Error::Decode(DecodeError::MalformedDictionary {
            category,
            prefix,
            len,
        }) => {
            assert_eq!(category, Category::Guesses);
            assert_eq!(prefix, "q");
            assert_eq!(len, 2);
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn test_malformed_length_four() {
    let groups = vec![PrefixGroup::new("ab", "cdef")];
    let err = expand_category(Category::Solutions, &groups).unwrap_err();
    assert_eq!(
        err,
        DecodeError::MalformedDictionary {
            category: Category::Solutions,
            prefix: "ab".to_string(),
            len: 4,
        }
    );
}

#[test]
fn test_malformed_is_deterministic() {
    let json = r#"{"N": {"ab": "cdefg", "cd": "ef"}, "I": {}}"#;
    let first = decode_str(json).unwrap_err().to_string();
    let second = decode_str(json).unwrap_err().to_string();
    assert_eq!(first, second);
    assert!(first.contains("'ab'"), "First bad prefix should be reported: {}", first);
}

#[test]
fn test_missing_category_is_schema_error() {
    let err = decode_str(r#"{"N": {"ab": "cde"}}"#).unwrap_err();
    assert!(matches!(
        err,
        Error::Decode(DecodeError::Schema {
            category: Some(Category::Guesses),
            ..
        })
    ));
}

#[test]
fn test_invalid_json() {
    assert!(matches!(decode_str("{\"N\": "), Err(Error::Json(_))));
}

#[test]
fn test_chunk_count_and_suffixes() {
    let run = "ACKODEORTOUT";
    let words = expand_category(Category::Solutions, &[PrefixGroup::new("AB", run)]).unwrap();
    assert_eq!(words.len(), run.len() / 3);
    for (i, word) in words.iter().enumerate() {
        assert_eq!(&word[2..], run[i * 3..i * 3 + 3].to_lowercase());
    }
}

#[test]
fn test_order_follows_prefix_order() {
    let forward = decode_str(r#"{"N": {"ab": "cde", "zz": "top"}, "I": {}}"#).unwrap();
    let reversed = decode_str(r#"{"N": {"zz": "top", "ab": "cde"}, "I": {}}"#).unwrap();
    assert_eq!(forward.solutions, vec!["abcde", "zztop"]);
    assert_eq!(reversed.solutions, vec!["zztop", "abcde"]);
}

#[test]
fn test_order_follows_chunk_order() {
    let flat = decode_str(r#"{"N": {"ab": "xyzcde"}, "I": {}}"#).unwrap();
    assert_eq!(flat.solutions, vec!["abxyz", "abcde"]);
}

#[test]
fn test_output_is_lowercase() {
    let flat = decode_str(r#"{"N": {"Ab": "CdE"}, "I": {"QU": "ERY"}}"#).unwrap();
    assert_eq!(flat.solutions, vec!["abcde"]);
    assert_eq!(flat.guesses, vec!["query"]);
}

#[test]
fn test_categories_are_isolated() {
    let flat = decode_str(r#"{"N": {"ab": "cde"}, "I": {"ab": "cde", "xy": "zzy"}}"#).unwrap();
    assert_eq!(flat.solutions, vec!["abcde"]);
    assert_eq!(flat.guesses, vec!["abcde", "xyzzy"]);
}

#[test]
fn test_duplicates_preserved() {
    let flat = decode_str(r#"{"N": {"ab": "cdecde"}, "I": {}}"#).unwrap();
    assert_eq!(flat.solutions, vec!["abcde", "abcde"]);
}

#[test]
fn test_empty_categories() {
    let flat = decode_str(r#"{"N": {}, "I": {"ab": ""}}"#).unwrap();
    assert!(flat.is_empty());
}

#[test]
fn test_rechunking_recovers_suffixes() {
    let run = "cdexyzpqr";
    let words = expand_category(Category::Guesses, &[PrefixGroup::new("ab", run)]).unwrap();
    let rechunked: String = words
        .iter()
        .map(|w| w.strip_prefix("ab").unwrap())
        .collect();
    assert_eq!(split_suffix_run(&rechunked), split_suffix_run(run));
}

#[test]
fn test_decode_is_idempotent() {
    let compressed = sample_dictionary().unwrap();
    assert_eq!(decode(&compressed).unwrap(), decode(&compressed).unwrap());
}

#[test]
fn test_sample_dictionary() {
    let flat = decode(&sample_dictionary().unwrap()).unwrap();
    assert_eq!(
        flat.solutions,
        vec!["aback", "abode", "abort", "about", "crane", "crate", "crumb", "slate"]
    );
    assert_eq!(
        flat.guesses,
        vec!["aahed", "aalii", "crane", "crags", "zymes", "zygon"]
    );
    assert!(flat
        .solutions
        .iter()
        .chain(&flat.guesses)
        .all(|w| w.len() == 5 && w.chars().all(|c| c.is_ascii_lowercase())));
}
