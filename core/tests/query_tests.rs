use textdex_core::{InvertedIndex, QueryResults};

fn sample_index() -> InvertedIndex {
    let mut index = InvertedIndex::new();
    index.add("cat", "f1", 1);
    index.add("car", "f1", 2);
    index.add("dog", "f2", 1);
    index
}

#[test]
fn lines_are_recorded_in_input_order() {
    let index = sample_index();
    let mut results = QueryResults::new();
    results.run_line("dog", &index);
    results.run_line("ca", &index);
    let lines: Vec<&str> = results.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(lines, vec!["dog", "ca"]);
}

#[test]
fn raw_line_is_the_key_even_when_normalized_for_search() {
    let index = sample_index();
    let mut results = QueryResults::new();
    results.run_line("  Ca!  ", &index);
    let (line, hits) = results.iter().next().unwrap();
    assert_eq!(line.as_str(), "  Ca!  ");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path(), "f1");
}

#[test]
fn line_normalizing_to_nothing_gets_an_empty_entry() {
    let index = sample_index();
    let mut results = QueryResults::new();
    results.run_line("!!!", &index);
    assert_eq!(results.len(), 1);
    let (line, hits) = results.iter().next().unwrap();
    assert_eq!(line.as_str(), "!!!");
    assert!(hits.is_empty());
}

#[test]
fn duplicate_line_replaces_earlier_results() {
    // A repeated raw line keeps the first occurrence's slot, matching the
    // ordered-map put behavior the output format depends on.
    let index = sample_index();
    let mut results = QueryResults::new();
    results.run_line("dog", &index);
    results.run_line("ca", &index);
    results.run_line("dog", &index);

    let lines: Vec<&str> = results.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(lines, vec!["dog", "ca"]);
    let (_, dog_hits) = results.iter().next().unwrap();
    assert_eq!(dog_hits.len(), 1);
    assert_eq!(dog_hits[0].path(), "f2");
}

#[test]
fn multi_word_line_yields_one_combined_result_list() {
    let index = sample_index();
    let mut results = QueryResults::new();
    results.run_line("cat dog", &index);
    assert_eq!(results.len(), 1);
    let (_, hits) = results.iter().next().unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].path(), "f1");
    assert_eq!(hits[1].path(), "f2");
}
