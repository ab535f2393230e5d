use std::collections::HashSet;

use rstest::{fixture, rstest};
use tempfile::tempdir;

use huffman_table::input::read_symbols_from_path;
use huffman_table::render::{write_csv_to_path, CSV_HEADER};
use huffman_table::util::testing::init_test_setup;
use huffman_table::{build_tree, count_frequencies, extract_codes, huffman_codes, CodeRecord};

#[fixture]
fn setup() {
    init_test_setup();
}

const SAMPLE: &str = "Hello, world! This is a sample text for Huffman compression.\n\
    The quick brown fox jumps over the lazy dog.\n\
    \tHuffman encoding is a greedy algorithm that builds optimal prefix codes.";

#[rstest]
#[case::two_symbols("ab")]
#[case::ties("aabbccdd")]
#[case::skewed("abbcccddddeeeeeffffff")]
#[case::whitespace(" \n\t \n  x")]
#[case::unicode("ççãão!é")]
#[case::sample(SAMPLE)]
fn test_one_record_per_symbol(#[from(setup)] _setup: (), #[case] input: &str) {
    let frequencies = count_frequencies(input.chars());
    let records = huffman_codes(input.chars()).unwrap();

    assert_eq!(records.len(), frequencies.len());
    for record in &records {
        assert_eq!(frequencies.get(&record.symbol), Some(record.frequency));
    }
}

#[rstest]
#[case::two_symbols("ab")]
#[case::ties("aabbccdd")]
#[case::skewed("abbcccddddeeeeeffffff")]
#[case::single("aaaa")]
#[case::sample(SAMPLE)]
fn test_weighted_path_length_matches_merge_cost(#[from(setup)] _setup: (), #[case] input: &str) {
    let frequencies = count_frequencies(input.chars());
    let tree = build_tree(&frequencies).unwrap().unwrap();
    let records = extract_codes(Some(&tree));

    let weighted: usize = records.iter().map(|r| r.frequency * r.code.len()).sum();
    assert_eq!(weighted, tree.merge_cost());
}

#[rstest]
#[case::two_symbols("ab")]
#[case::ties("aabbccdd")]
#[case::skewed("abbcccddddeeeeeffffff")]
#[case::sample(SAMPLE)]
fn test_codes_are_prefix_free(#[from(setup)] _setup: (), #[case] input: &str) {
    let records = huffman_codes(input.chars()).unwrap();

    for a in &records {
        assert!(!a.code.is_empty());
        assert!(a.code.chars().all(|c| c == '0' || c == '1'));
        for b in &records {
            if a.symbol != b.symbol {
                assert!(!b.code.starts_with(&a.code), "{:?} prefixes {:?}", a, b);
            }
        }
    }
    let distinct: HashSet<_> = records.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(distinct.len(), records.len());
}

#[rstest]
fn test_pipeline_is_deterministic(#[from(setup)] _setup: ()) {
    let first = huffman_codes(SAMPLE.chars()).unwrap();
    let second = huffman_codes(SAMPLE.chars()).unwrap();
    assert_eq!(first, second);
}

#[rstest]
fn test_empty_input(#[from(setup)] _setup: ()) {
    let frequencies = count_frequencies("".chars());
    assert!(frequencies.is_empty());
    let tree = build_tree(&frequencies).unwrap();
    assert!(tree.is_none());
    assert!(extract_codes(tree.as_ref()).is_empty());
}

#[rstest]
fn test_single_distinct_symbol(#[from(setup)] _setup: ()) {
    let frequencies = count_frequencies("aaaa".chars());
    assert_eq!(frequencies.get(&'a'), Some(4));

    let tree = build_tree(&frequencies).unwrap().unwrap();
    assert!(tree.root.is_leaf());
    assert_eq!(tree.root.symbol(), Some(&'a'));
    assert_eq!(tree.weight(), 4);

    let records = extract_codes(Some(&tree));
    assert_eq!(
        records,
        vec![CodeRecord {
            symbol: 'a',
            frequency: 4,
            code: String::new(),
        }]
    );
}

#[rstest]
fn test_aabbbcc_end_to_end(#[from(setup)] _setup: ()) {
    let records = huffman_codes("aabbbcc".chars()).unwrap();
    let rows: Vec<_> = records
        .iter()
        .map(|r| (r.symbol, r.frequency, r.code.as_str()))
        .collect();
    assert_eq!(rows, vec![('a', 2, "10"), ('b', 3, "0"), ('c', 2, "11")]);
}

#[rstest]
#[case::two_digits("21", vec![('1', "0"), ('2', "1")])]
#[case::digits_then_letters("b2a1", vec![('1', "00"), ('2', "01"), ('a', "11"), ('b', "10")])]
#[case::digit_leaf_before_merged_node("9a9b", vec![('9', "0"), ('a', "10"), ('b', "11")])]
fn test_digit_symbols_seed_first(
    #[from(setup)] _setup: (),
    #[case] input: &str,
    #[case] expected: Vec<(char, &str)>,
) {
    let records = huffman_codes(input.chars()).unwrap();
    let rows: Vec<_> = records.iter().map(|r| (r.symbol, r.code.as_str())).collect();
    assert_eq!(rows, expected);
}

#[rstest]
fn test_file_to_csv(#[from(setup)] _setup: ()) {
    let dir = tempdir().unwrap();
    let input = dir.path().join("entrada.txt");
    let output = dir.path().join("saida.csv");
    std::fs::write(&input, "aabbbcc").unwrap();

    let symbols = read_symbols_from_path(&input).unwrap();
    let records = huffman_codes(symbols).unwrap();
    write_csv_to_path(&records, &output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, format!("{}\na,2,10\nb,3,0\nc,2,11", CSV_HEADER));
}

#[rstest]
fn test_empty_file_to_csv(#[from(setup)] _setup: ()) {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    let output = dir.path().join("empty.csv");
    std::fs::write(&input, "").unwrap();

    let records = huffman_codes(read_symbols_from_path(&input).unwrap()).unwrap();
    write_csv_to_path(&records, &output).unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), CSV_HEADER);
}
