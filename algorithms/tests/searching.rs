use algorithms::searching::linear_search::linear_search;
use algorithms::searching::sentinel_search::sentinel_search;
use algorithms::searching::SearchAlgorithm;

const SORTED: [i64; 7] = [1, 2, 3, 5, 6, 7, 9];

fn search(algorithm: SearchAlgorithm, input: &[i64], item: i64) -> Option<usize> {
    let mut values = input.to_vec();
    let found = algorithm.search(&mut values, item);
    assert_eq!(values, input, "{algorithm} search must leave the sequence unchanged");
    found
}

#[test]
fn every_algorithm_finds_existing_element() {
    for algorithm in SearchAlgorithm::ALL {
        assert_eq!(search(algorithm, &SORTED, 7), Some(5), "{algorithm}");
    }
}

#[test]
fn every_algorithm_finds_first_and_last_index() {
    for algorithm in SearchAlgorithm::ALL {
        assert_eq!(search(algorithm, &SORTED, 1), Some(0), "{algorithm}");
        assert_eq!(search(algorithm, &SORTED, 9), Some(SORTED.len() - 1), "{algorithm}");
    }
}

#[test]
fn missing_element_is_none() {
    for algorithm in SearchAlgorithm::ALL {
        for item in [4, 8, 0, 10, -3, i64::MIN, i64::MAX] {
            assert_eq!(search(algorithm, &SORTED, item), None, "{algorithm} looking for {item}");
        }
    }
}

#[test]
fn empty_sequence_is_none() {
    for algorithm in SearchAlgorithm::ALL {
        assert_eq!(search(algorithm, &[], 1), None, "{algorithm}");
    }
}

#[test]
fn single_element_sequence() {
    for algorithm in SearchAlgorithm::ALL {
        assert_eq!(search(algorithm, &[4], 4), Some(0), "{algorithm}");
        assert_eq!(search(algorithm, &[4], 5), None, "{algorithm}");
    }
}

#[test]
fn duplicates_follow_each_narrowing_strategy() {
    assert_eq!(search(SearchAlgorithm::Binary, &[1, 2, 3, 5, 5, 6, 7, 9], 5), Some(3));
    assert_eq!(search(SearchAlgorithm::Interpolation, &[1, 2, 3, 3, 5, 6, 7, 9], 3), Some(2));
    assert_eq!(search(SearchAlgorithm::Ternary, &[1, 2, 3, 5, 6, 7, 7, 9], 7), Some(5));
    assert_eq!(search(SearchAlgorithm::Fibonacci, &[1, 2, 2, 3, 5, 6, 7, 9], 2), Some(2));
    assert_eq!(search(SearchAlgorithm::Sentinel, &[1, 2, 3, 5, 5, 6, 7, 9], 5), Some(3));
    assert_eq!(search(SearchAlgorithm::Jump, &[1, 2, 3, 5, 5, 6, 7, 9], 5), Some(3));
}

#[test]
fn linear_search_reports_last_duplicate() {
    assert_eq!(linear_search(&[1, 2, 3, 5, 6, 6, 7, 9], &6), Some(5));
    assert_eq!(linear_search(&[4, 1, 4, 1], &4), Some(2));
}

#[test]
fn sentinel_search_handles_target_only_in_last_slot() {
    let mut values = vec![3, 1, 8];
    assert_eq!(sentinel_search(&mut values, 8), Some(2));
    assert_eq!(sentinel_search(&mut values, 2), None);
    assert_eq!(values, vec![3, 1, 8]);
}

#[test]
fn interpolation_search_survives_flat_regions() {
    let flat = [4, 4, 4, 4];
    assert!(search(SearchAlgorithm::Interpolation, &flat, 4).is_some());
    assert_eq!(search(SearchAlgorithm::Interpolation, &flat, 5), None);
    assert_eq!(search(SearchAlgorithm::Interpolation, &[1, 1, 1, 9, 9], 9), Some(4));
}

#[test]
fn interpolation_search_handles_extreme_spread() {
    let values = [i64::MIN, -1, 0, 1, i64::MAX];
    for (i, &v) in values.iter().enumerate() {
        assert_eq!(search(SearchAlgorithm::Interpolation, &values, v), Some(i));
    }
}

#[test]
fn sorted_searches_find_every_member_of_long_sequence() {
    let values: Vec<i64> = (0..500).map(|i| i * 3 - 200).collect();
    for algorithm in SearchAlgorithm::ALL {
        for (i, &v) in values.iter().enumerate() {
            assert_eq!(search(algorithm, &values, v), Some(i), "{algorithm} looking for {v}");
            assert_eq!(search(algorithm, &values, v + 1), None, "{algorithm} looking for {}", v + 1);
        }
    }
}

#[test]
fn only_linear_and_sentinel_accept_unsorted_input() {
    let unsorted: Vec<_> = SearchAlgorithm::ALL.into_iter().filter(|a| !a.requires_sorted()).collect();
    assert_eq!(unsorted, vec![SearchAlgorithm::Linear, SearchAlgorithm::Sentinel]);
}

#[test]
fn algorithm_names_parse() {
    assert_eq!("binary-search".parse::<SearchAlgorithm>().unwrap(), SearchAlgorithm::Binary);
    assert_eq!("Jump".parse::<SearchAlgorithm>().unwrap(), SearchAlgorithm::Jump);
    assert!("hash".parse::<SearchAlgorithm>().is_err());
}
