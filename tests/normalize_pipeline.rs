use zaum::{normalize, NormalizeConfig, DASH, PUNCTUATION};

fn defaults() -> NormalizeConfig {
    NormalizeConfig::default()
}

#[test]
fn full_pipeline_on_messy_russian_text() {
    let input = "Глаза...  ГЛАЗА -- зачем?!\nНе знаю..\tСовсем не знаю…";
    let out = normalize(input, &defaults());
    assert_eq!(
        out,
        "глаза … глаза — зачем ? ! не знаю . совсем не знаю … "
    );
}

#[test]
fn pipeline_is_idempotent() {
    let cfg = defaults();
    let inputs = [
        "Глаза...  глаза -- зачем?!",
        "«Раз» — два/три: (четыре), пять.",
        "кто-то  ..  где-то\n....",
        "",
        "   ",
    ];
    for input in inputs {
        let once = normalize(input, &cfg);
        let twice = normalize(&once, &cfg);
        assert_eq!(twice, once, "pipeline not stable for {input:?}");
    }
}

#[test]
fn no_doubled_spaces_survive() {
    let out = normalize("а?!б  ,,  в((г))д", &defaults());
    assert!(!out.contains("  "), "doubled space in {out:?}");
}

#[test]
fn every_punctuation_member_ends_up_padded() {
    for ch in PUNCTUATION {
        let out = normalize(&format!("аа{ch}бб"), &defaults());
        // The dash stage turns the em dash member into the same padded form.
        let expected = if ch == '—' {
            format!("аа {DASH} бб")
        } else {
            format!("аа {ch} бб")
        };
        assert_eq!(out, expected, "member {ch:?}");
    }
}

#[test]
fn dash_spellings_converge() {
    let cfg = defaults();
    for input in ["xx—yy", "xx–yy", "xx--yy", "xx - yy", "xx -yy", "xx- yy"] {
        assert_eq!(normalize(input, &cfg), "xx — yy", "input {input:?}");
    }
    assert_eq!(normalize("xx-yy", &cfg), "xx-yy");
}

#[test]
fn ellipsis_edge_cases_through_the_pipeline() {
    let cfg = defaults();
    assert_eq!(normalize("....", &cfg), " … ");
    assert_eq!(normalize("х... у...", &cfg), "х … у … ");
    // Whitespace collapse runs first, so the newline is a space by the
    // time the ellipsis stage sees the dots.
    assert_eq!(normalize("....\n..", &cfg), " … . ");
}

#[test]
fn keep_case_config_is_honored() {
    let cfg = NormalizeConfig {
        lowercase: false,
        ..Default::default()
    };
    assert_eq!(normalize("Привет МИР", &cfg), "Привет МИР");
}

#[test]
fn empty_and_whitespace_only_inputs() {
    let cfg = defaults();
    assert_eq!(normalize("", &cfg), "");
    assert_eq!(normalize(" \t\n ", &cfg), " ");
}
