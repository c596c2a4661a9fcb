use zaum::{generate_verses, normalize, NormalizeConfig, VerseConfig, ZaumError};

const CORPUS: &str = "глаза смотрят в небо . \
душа поёт тихо и странно . \
зачем всё это нужно ? \
город спит , огни горят . \
ветер носит сухие листья по дворам …";

fn config() -> VerseConfig {
    VerseConfig {
        min_sentence_len: 4,
        max_sentence_len: 10,
        sentence_count: 6,
        lines_per_verse: 2,
        pool_size: 10,
    }
}

#[test]
fn seeded_generation_is_deterministic() {
    let mut rng_a = fastrand::Rng::with_seed(42);
    let mut rng_b = fastrand::Rng::with_seed(42);
    let out_a = generate_verses(CORPUS, &config(), &mut rng_a).expect("verses");
    let out_b = generate_verses(CORPUS, &config(), &mut rng_b).expect("verses");
    assert_eq!(out_a, out_b);
}

#[test]
fn output_has_expected_line_and_stanza_structure() {
    let mut rng = fastrand::Rng::with_seed(7);
    let out = generate_verses(CORPUS, &config(), &mut rng).expect("verses");

    let content: Vec<&str> = out.lines().filter(|line| !line.is_empty()).collect();
    assert_eq!(content.len(), 6);

    // lines_per_verse = 2, so a blank line follows every second sentence.
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[2], "");
    assert_eq!(lines[5], "");

    for line in content {
        assert!(
            line.starts_with("Много") || line.starts_with("Малость") || line.starts_with("Зачем"),
            "line {line:?} lacks a refrain"
        );
        assert!(
            line.ends_with('.') || line.ends_with('?'),
            "line {line:?} lacks a terminator"
        );
        assert!(!line.contains(" ,"), "comma detached in {line:?}");
        assert!(!line.contains(" ."), "terminator detached in {line:?}");
    }
}

#[test]
fn sampling_respects_length_bounds() {
    // Only "зачем всё это нужно" has exactly 4 effective words; pinning the
    // bounds to 4..=4 forces every sampled sentence to be that one.
    let cfg = VerseConfig {
        min_sentence_len: 4,
        max_sentence_len: 4,
        sentence_count: 3,
        lines_per_verse: 6,
        pool_size: 5,
    };
    let corpus = "раз два . зачем всё это нужно ? очень длинное предложение из многих слов тут .";
    let mut rng = fastrand::Rng::with_seed(1);
    let out = generate_verses(corpus, &cfg, &mut rng).expect("verses");
    for line in out.lines().filter(|line| !line.is_empty()) {
        assert!(line.contains("зачем всё это нужно"), "line {line:?}");
    }
}

#[test]
fn empty_selection_is_an_error() {
    let cfg = VerseConfig {
        min_sentence_len: 20,
        max_sentence_len: 30,
        ..Default::default()
    };
    let mut rng = fastrand::Rng::with_seed(0);
    let err = generate_verses(CORPUS, &cfg, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        ZaumError::EmptyCorpus { min: 20, max: 30 }
    ));
}

#[test]
fn invalid_bounds_are_rejected() {
    let cfg = VerseConfig {
        min_sentence_len: 10,
        max_sentence_len: 4,
        ..Default::default()
    };
    let mut rng = fastrand::Rng::with_seed(0);
    let err = generate_verses(CORPUS, &cfg, &mut rng).unwrap_err();
    assert!(matches!(err, ZaumError::InvalidConfig(_)));

    let cfg = VerseConfig {
        pool_size: 0,
        ..Default::default()
    };
    let err = generate_verses(CORPUS, &cfg, &mut rng).unwrap_err();
    assert!(matches!(err, ZaumError::InvalidConfig(_)));
}

#[test]
fn normalized_output_feeds_straight_into_the_sampler() {
    let raw = "Глаза смотрят в небо...  ЗАЧЕМ всё это нужно?!";
    let corpus = normalize(raw, &NormalizeConfig::default());
    let cfg = VerseConfig {
        min_sentence_len: 3,
        max_sentence_len: 10,
        sentence_count: 2,
        lines_per_verse: 6,
        pool_size: 4,
    };
    let mut rng = fastrand::Rng::with_seed(3);
    let out = generate_verses(&corpus, &cfg, &mut rng).expect("verses");
    assert_eq!(out.lines().filter(|line| !line.is_empty()).count(), 2);
}
