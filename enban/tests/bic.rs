use enban::{Bic, BicFormat, BicPattern, BicStyles, EnbanError, Pattern};

#[test]
fn format_table() {
    let cases = [
        ("DRESDEFF370", BicFormat::Compact, "DRESDEFF370"),
        ("DRESDEFF", BicFormat::Compact, "DRESDEFF"),
        ("DRESDEFFXXX", BicFormat::Compact, "DRESDEFF"),
        ("DRESDEFF370", BicFormat::Full, "DRESDEFF370"),
        ("DRESDEFFXXX", BicFormat::Full, "DRESDEFFXXX"),
        ("DRESDEFF", BicFormat::Full, "DRESDEFFXXX"),
        ("DRESDEFF370", BicFormat::Original, "DRESDEFF370"),
        ("DRESDEFFXXX", BicFormat::Original, "DRESDEFFXXX"),
        ("DRESDEFF", BicFormat::Original, "DRESDEFF"),
    ];

    for (text, format, expected) in cases {
        let bic = Bic::parse(text, BicStyles::LENIENT).unwrap();
        assert_eq!(bic.format(format), expected, "{text} as {format:?}");

        let pattern = BicPattern::compact()
            .with_styles(BicStyles::LENIENT)
            .with_format(format);
        assert_eq!(pattern.format(&bic), expected);
    }
}

#[test]
fn invalid_bics() {
    let cases = [
        "DRESDEFF37",
        "DRESDEFF3700",
        "_%&$DEFF370",
        "DRES99FF370",
        "DRES_%FF370",
        "DRESZZFF370",
        "DRESDE_%370",
        "DRESDEFO370",
        "DRESDEFFXYZ",
        "DRESDEFF_%$",
        "",
        "   ",
    ];

    for text in cases {
        assert!(Bic::parse(text, BicStyles::LENIENT).is_err(), "{text:?}");
        assert!(text.parse::<Bic>().is_err(), "{text:?}");
    }
}

#[test]
fn rejection_reasons() {
    let parse = |text: &str| Bic::parse(text, BicStyles::LENIENT);

    assert!(matches!(parse("DRESDEFF37"), Err(EnbanError::MalformedInput(_))));
    assert!(matches!(parse("DRES_%FF370"), Err(EnbanError::InvalidCountryCode(_))));
    assert!(matches!(parse("DRESDEFO370"), Err(EnbanError::InvalidLocationCode(_))));
    assert!(matches!(parse("DRESDEFFXYZ"), Err(EnbanError::InvalidBranchCode(_))));
}

#[test]
fn lenient_round_trip() {
    let lenient = BicPattern::compact().with_styles(BicStyles::LENIENT);

    for text in ["DRESDEFF370", "dresdeffxxx", " DEUTDEFF ", "BKAUATWW", "UBSWCHZH80A"] {
        let bic = lenient.parse(text).unwrap();
        for format in [BicFormat::Full, BicFormat::Compact, BicFormat::Original] {
            assert_eq!(lenient.parse(&bic.format(format)), Ok(bic.clone()));
        }
    }
}

#[test]
fn styles_control_primary_office_code() {
    let strict_compact = BicPattern::compact();
    let strict_full = BicPattern::full();

    assert!(strict_compact.parse("DRESDEFFXXX").is_err());
    assert!(strict_full.parse("DRESDEFF").is_err());

    let both = BicStyles::COMPACT | BicStyles::FULL;
    let neither = BicPattern::compact().with_styles(both);
    assert!(neither.parse("DRESDEFF").is_err());
    assert!(neither.parse("DRESDEFFXXX").is_err());
    assert!(neither.parse("DRESDEFF370").is_ok());
}

#[cfg(feature = "serde")]
mod serde_support {
    use enban::{Bic, Iban};

    #[test]
    fn iban_as_string() {
        let iban: Iban = "DE89 3704 0044 0532 0130 00".parse().unwrap();
        let json = serde_json::to_string(&iban).unwrap();
        assert_eq!(json, "\"DE89370400440532013000\"");
        assert_eq!(serde_json::from_str::<Iban>(&json).unwrap(), iban);

        assert!(serde_json::from_str::<Iban>("\"DE88370400440532013000\"").is_err());
        assert!(serde_json::from_str::<Iban>("89").is_err());
    }

    #[test]
    fn bic_keeps_original_form() {
        for text in ["DRESDEFF", "DRESDEFFXXX", "DRESDEFF370"] {
            let bic: Bic = text.parse().unwrap();
            let json = serde_json::to_string(&bic).unwrap();
            assert_eq!(json, format!("\"{text}\""));

            let back: Bic = serde_json::from_str(&json).unwrap();
            assert_eq!(back.explicit_branch_code(), bic.explicit_branch_code());
        }

        assert!(serde_json::from_str::<Bic>("\"DRESDEFO370\"").is_err());
    }

    #[test]
    fn segment_lengths_are_checked() {
        use enban::validation::{compile, to_pattern_text};
        use enban::Segment;

        let json = serde_json::to_string(&compile("4!a").unwrap()).unwrap();
        let segments: Vec<Segment> = serde_json::from_str(&json).unwrap();
        assert_eq!(to_pattern_text(&segments), "4!a");

        let zero = r#"[{"character_class":"Digits","length":{"Fixed":0}}]"#;
        assert!(serde_json::from_str::<Vec<Segment>>(zero).is_err());
    }

    #[test]
    fn check_digit_as_number() {
        let iban: Iban = "XK05 1212 0123 4567 8906".parse().unwrap();
        assert_eq!(serde_json::to_string(&iban.check_digit()).unwrap(), "5");
        assert!(serde_json::from_str::<enban::CheckDigit>("100").is_err());
    }
}
