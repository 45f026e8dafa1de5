use cpf_validator::core::cpf::{check_digit, sanitize};
use cpf_validator::{validate, validate_detailed, Cpf, CpfError};

const VALID_CPFS: [&str; 7] = [
    "52998224725",
    "11144477735",
    "12345678909",
    "00000000191",
    "93541134780",
    "39053344705",
    "98765432100",
];

fn digits_of(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'0').collect()
}

#[test]
fn test_known_valid_cpfs() {
    for cpf in VALID_CPFS {
        assert!(validate(cpf), "{} should be valid", cpf);
    }
}

#[test]
fn test_check_digits_round_trip_from_base() {
    for cpf in VALID_CPFS {
        let mut digits = digits_of(&cpf[..9]);
        let first = check_digit(&digits, 9);
        digits.push(first);
        let second = check_digit(&digits, 10);
        digits.push(second);

        assert_eq!(digits, digits_of(cpf), "round trip failed for {}", cpf);
    }
}

#[test]
fn test_every_degenerate_sequence_is_invalid() {
    for digit in 0..=9u8 {
        let repeated = digit.to_string().repeat(11);
        assert!(!validate(&repeated));
        assert_eq!(
            validate_detailed(&repeated),
            Err(CpfError::DegenerateSequence { digit })
        );

        let formatted = format!(
            "{0}{0}{0}.{0}{0}{0}.{0}{0}{0}-{0}{0}",
            digit
        );
        assert!(!validate(&formatted));
    }
}

#[test]
fn test_wrong_length_is_invalid() {
    let cases = ["", "1", "1234567890", "529982247250", "abc.def.ghi-jk", "529.982.247-2"];
    for input in cases {
        assert!(!validate(input), "{:?} should be invalid", input);
        assert!(matches!(
            validate_detailed(input),
            Err(CpfError::MalformedLength { .. })
        ));
    }
}

#[test]
fn test_formatting_does_not_change_outcome() {
    let variants = [
        "52998224725",
        "529.982.247-25",
        " 529 982 247 25 ",
        "529-982-247/25",
        "CPF: 529.982.247-25",
    ];
    for input in variants {
        assert_eq!(sanitize(input), "52998224725");
        assert_eq!(validate(input), validate("52998224725"));
    }
}

#[test]
fn test_single_digit_corruption_is_detected() {
    let original = digits_of("52998224725");
    for position in 0..11 {
        let mut corrupted = original.clone();
        corrupted[position] = (corrupted[position] + 1) % 10;
        let input: String = corrupted.iter().map(|d| char::from(b'0' + d)).collect();
        assert!(!validate(&input), "corruption at {} not detected: {}", position, input);
    }
}

#[test]
fn test_validate_is_deterministic() {
    for input in ["52998224725", "52998224724", "", "11111111111"] {
        let first = validate(input);
        for _ in 0..5 {
            assert_eq!(validate(input), first);
        }
    }
}

#[test]
fn test_boolean_matches_detailed_result() {
    let inputs = [
        "52998224725",
        "11111111111",
        "1234567890",
        "52998224724",
        "",
        "abc.def.ghi-jk",
    ];
    for input in inputs {
        assert_eq!(validate(input), validate_detailed(input).is_ok());
    }
}

#[test]
fn test_cpf_from_str() {
    let cpf: Cpf = "529.982.247-25".parse().unwrap();
    assert_eq!(cpf.to_string(), "52998224725");
    assert_eq!(cpf.base(), &[5, 2, 9, 9, 8, 2, 2, 4, 7]);
    assert_eq!(
        serde_json::to_string(&cpf).unwrap(),
        "\"52998224725\""
    );

    let err = "52998224724".parse::<Cpf>().unwrap_err();
    assert_eq!(err.code(), "checksum_mismatch");
}

#[test]
fn test_validation_is_safe_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                VALID_CPFS.iter().all(|cpf| validate(cpf)) && !validate("52998224724")
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
