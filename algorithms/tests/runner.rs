use algorithms::computation_map;
use algorithms::config::Limits;
use algorithms::cryptography::{CipherAlgorithm, Mode};
use algorithms::runner::{MathOperation, MathValue, Runner, StringOperation, StringValue};
use algorithms::searching::SearchAlgorithm;
use algorithms::sorting::SortAlgorithm;
use algorithms::AlgorithmError;

fn tight_limits() -> Limits {
    Limits {
        max_sequence_len: 4,
        max_counting_range: 100,
        max_permutation_len: 3,
        max_sieve_threshold: 50,
        max_text_len: 16,
        max_quadratic_len: 3,
        max_prime_candidate: 1_000,
    }
}

#[test]
fn sort_report_carries_input_and_output() {
    let report = Runner::default().sort(SortAlgorithm::Quick, "5 -2 9 0").unwrap();
    assert_eq!(report.algorithm, "quick-sort");
    assert_eq!(report.outcome.input, "5 -2 9 0");
    assert_eq!(report.outcome.sorted, "-2 0 5 9");
}

#[test]
fn sort_rejects_malformed_input() {
    let err = Runner::default().sort(SortAlgorithm::Heap, "1 two 3").unwrap_err();
    assert!(matches!(err, AlgorithmError::Format(_)));
}

#[test]
fn sort_enforces_sequence_limit() {
    let err = Runner::new(tight_limits()).sort(SortAlgorithm::Bubble, "1 2 3 4 5").unwrap_err();
    assert_eq!(err, AlgorithmError::LimitExceeded { what: "sequence length", value: 5, limit: 4 });
}

#[test]
fn quadratic_sorts_have_their_own_length_limit() {
    let runner = Runner::new(tight_limits());
    for algorithm in SortAlgorithm::ALL {
        let result = runner.sort(algorithm, "4 3 2 1");
        if algorithm.is_quadratic() {
            assert_eq!(
                result.unwrap_err(),
                AlgorithmError::LimitExceeded { what: "quadratic sort length", value: 4, limit: 3 },
                "{algorithm}"
            );
        } else {
            assert_eq!(result.unwrap().outcome.sorted, "1 2 3 4", "{algorithm}");
        }
    }
}

#[test]
fn default_limits_reject_long_bubble_sort() {
    let descending: Vec<String> = (0..20_001).rev().map(|v: i64| v.to_string()).collect();
    let err = Runner::default().sort(SortAlgorithm::Bubble, &descending.join(" ")).unwrap_err();
    assert!(matches!(err, AlgorithmError::LimitExceeded { what: "quadratic sort length", value: 20_001, .. }));
    assert!(Runner::default().sort(SortAlgorithm::Heap, &descending.join(" ")).is_ok());
}

#[test]
fn counting_sort_uses_configured_range() {
    let runner = Runner::new(tight_limits());
    assert!(runner.sort(SortAlgorithm::Counting, "0 99").is_ok());
    assert!(matches!(runner.sort(SortAlgorithm::Counting, "0 100"), Err(AlgorithmError::Domain(_))));
}

#[test]
fn search_report_shows_sorted_array() {
    let report = Runner::default().search(SearchAlgorithm::Binary, "9 3 7 1", 7).unwrap();
    assert_eq!(report.algorithm, "binary-search");
    assert_eq!(report.outcome.array, "1 3 7 9");
    assert_eq!(report.outcome.index, Some(2));
}

#[test]
fn unsorted_search_keeps_input_order() {
    let report = Runner::default().search(SearchAlgorithm::Linear, "9 3 7 3", 3).unwrap();
    assert_eq!(report.outcome.array, "9 3 7 3");
    assert_eq!(report.outcome.index, Some(3));

    let report = Runner::default().search(SearchAlgorithm::Sentinel, "9 3 7", 4).unwrap();
    assert_eq!(report.outcome.array, "9 3 7");
    assert_eq!(report.outcome.index, None);
}

#[test]
fn math_operations() {
    let runner = Runner::default();
    assert_eq!(runner.math(MathOperation::Factorial(5)).unwrap().outcome.result, MathValue::Number(120));
    assert_eq!(runner.math(MathOperation::Fibonacci(7)).unwrap().outcome.result, MathValue::Number(13));
    let gcd = runner.math(MathOperation::Gcd { a: -36, b: -48, recursive: true }).unwrap();
    assert_eq!(gcd.algorithm, "recursive-gcd");
    assert_eq!(gcd.outcome.result, MathValue::Number(12));
    assert_eq!(runner.math(MathOperation::IsPrime(13)).unwrap().outcome.result, MathValue::Flag(true));
    assert_eq!(
        runner.math(MathOperation::Sieve(8)).unwrap().outcome.result,
        MathValue::Primes(vec![2, 3, 5, 7])
    );
}

#[test]
fn math_errors_propagate() {
    let runner = Runner::new(tight_limits());
    assert!(matches!(runner.math(MathOperation::Factorial(-1)), Err(AlgorithmError::Domain(_))));
    assert!(matches!(runner.math(MathOperation::Sieve(-8)), Err(AlgorithmError::Domain(_))));
    assert!(matches!(
        runner.math(MathOperation::Sieve(51)),
        Err(AlgorithmError::LimitExceeded { what: "sieve threshold", .. })
    ));
}

#[test]
fn prime_candidates_are_bounded() {
    let runner = Runner::new(tight_limits());
    assert_eq!(runner.math(MathOperation::IsPrime(997)).unwrap().outcome.result, MathValue::Flag(true));
    assert_eq!(runner.math(MathOperation::IsPrime(-1_000_003)).unwrap().outcome.result, MathValue::Flag(false));
    assert_eq!(
        runner.math(MathOperation::IsPrime(1_009)).unwrap_err(),
        AlgorithmError::LimitExceeded { what: "prime candidate", value: 1_009, limit: 1_000 }
    );
    assert!(matches!(
        Runner::default().math(MathOperation::IsPrime(1_000_000_000_000_000_003)),
        Err(AlgorithmError::LimitExceeded { what: "prime candidate", .. })
    ));
}

#[test]
fn runner_exposes_its_limits() {
    assert_eq!(Runner::new(tight_limits()).limits(), &tight_limits());
    assert_eq!(Runner::default().limits(), &Limits::default());
}

#[test]
fn cipher_reports_normalized_key() {
    let report = Runner::default()
        .cipher(CipherAlgorithm::Vigenere, "attack", Some("lemon"), Mode::Encrypt)
        .unwrap();
    assert_eq!(report.outcome.key.as_deref(), Some("LEMON"));
    assert_eq!(report.outcome.result, "lxfopv");
    assert_eq!(report.outcome.mode, Mode::Encrypt);
}

#[test]
fn cipher_key_errors() {
    let runner = Runner::default();
    assert!(matches!(
        runner.cipher(CipherAlgorithm::Caesar, "abc", None, Mode::Encrypt),
        Err(AlgorithmError::Range(_))
    ));
    assert!(matches!(
        runner.cipher(CipherAlgorithm::Scytale, "abc", Some("three"), Mode::Encrypt),
        Err(AlgorithmError::Format(_))
    ));
    let report = runner.cipher(CipherAlgorithm::Rot13, "abc", Some("ignored"), Mode::Decrypt).unwrap();
    assert_eq!(report.outcome.key, None);
    assert_eq!(report.outcome.result, "nop");
}

#[test]
fn self_inverse_ciphers_undo_themselves() {
    let runner = Runner::default();
    for algorithm in CipherAlgorithm::ALL.into_iter().filter(|a| a.is_self_inverse()) {
        let once = runner.cipher(algorithm, "Attack at dawn!", None, Mode::Encrypt).unwrap();
        let twice = runner.cipher(algorithm, &once.outcome.result, None, Mode::Encrypt).unwrap();
        assert_ne!(once.outcome.result, "Attack at dawn!", "{algorithm}");
        assert_eq!(twice.outcome.result, "Attack at dawn!", "{algorithm}");
    }
}

#[test]
fn catalog_marks_exactly_the_stable_sorts() {
    for algorithm in SortAlgorithm::ALL {
        let path = format!("sorting/{}_sort.rs", algorithm.name());
        let entry = computation_map::entries().find(|e| e.path == path).unwrap();
        assert_eq!(entry.property == "Stable", algorithm.is_stable(), "{path}");
    }
}

#[test]
fn cipher_enforces_text_limit() {
    let err = Runner::new(tight_limits())
        .cipher(CipherAlgorithm::Atbash, "seventeen letters", None, Mode::Encrypt)
        .unwrap_err();
    assert!(matches!(err, AlgorithmError::LimitExceeded { what: "text length", .. }));
}

#[test]
fn string_operations() {
    let runner = Runner::default();
    let report = runner.strings(StringOperation::Palindrome("Wow".into())).unwrap();
    assert_eq!(report.algorithm, "is-palindrome");
    assert_eq!(report.outcome.result, StringValue::Flag(true));

    let report = runner
        .strings(StringOperation::Find { text: "abab".into(), pattern: "ab".into() })
        .unwrap();
    assert_eq!(report.outcome.result, StringValue::Indices(vec![0, 2]));
}

#[test]
fn permutation_length_limit() {
    let runner = Runner::new(tight_limits());
    assert!(runner.strings(StringOperation::Permutations("abc".into())).is_ok());
    assert!(matches!(
        runner.strings(StringOperation::Permutations("abcd".into())),
        Err(AlgorithmError::LimitExceeded { what: "permutation input length", value: 4, limit: 3 })
    ));
}

#[test]
fn report_serializes_flat() {
    let report = Runner::default().sort(SortAlgorithm::Merge, "2 1").unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["algorithm"], "merge-sort");
    assert_eq!(json["sorted"], "1 2");
    assert!(json.get("outcome").is_none());
}

#[test]
fn catalog_covers_every_algorithm() {
    let paths: Vec<&str> = computation_map::entries().map(|e| e.path).collect();
    for algorithm in SortAlgorithm::ALL {
        let file = format!("sorting/{}_sort.rs", algorithm.name());
        assert!(paths.contains(&file.as_str()), "{file}");
    }
    for algorithm in SearchAlgorithm::ALL {
        let file = format!("searching/{}_search.rs", algorithm.name());
        assert!(paths.contains(&file.as_str()), "{file}");
    }
    for algorithm in CipherAlgorithm::ALL {
        let file = format!("cryptography/{}.rs", algorithm.name());
        assert!(paths.contains(&file.as_str()), "{file}");
    }
}
