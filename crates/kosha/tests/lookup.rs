use padaccheda_kosha::{Analysis, Kosha, Lexicon};

#[test]
fn bundled_lexicon_agrees_with_itself() {
    let k = Kosha::new().unwrap();
    // Every analysed form is also a member of the word set.
    for form in ["rAmaH", "tat", "tvam", "asi", "guru", "upadeSaH", "AtmA"] {
        assert!(k.is_word(form), "{form} missing from word set");
        assert!(k.analyse(form).is_some(), "{form} missing analyses");
    }
}

#[test]
fn membership_is_exact_not_prefix() {
    let k = Kosha::new().unwrap();
    assert!(k.is_word("tat"));
    assert!(k.is_word("tattva"));
    assert!(!k.is_word("tatt"));
    assert!(!k.is_word("ta"));
}

#[test]
fn analyse_returns_expected_reading() {
    let k = Kosha::new().unwrap();
    let readings = k.analyse("gacCati").unwrap();
    assert_eq!(
        readings,
        vec![Analysis::new(
            "gam",
            ["v-cj-prim", "sys-prs-md-pr", "trd", "np-sg"]
        )]
    );
}

#[test]
fn custom_lexicon_round_trips() {
    let k = Kosha::from_data(
        "abc\nabcsxyz\nsxyz\n",
        "abc\tabc\tparti\nsxyz\tsxyz\tparti\n",
    )
    .unwrap();
    assert!(k.is_word("abcsxyz"));
    assert!(k.analyse("abcsxyz").is_none());
    assert_eq!(k.analyse("abc").unwrap().len(), 1);
}
