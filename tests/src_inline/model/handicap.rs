use super::*;

fn course() -> CourseProfile {
    CourseProfile::craigavon()
}

fn input(old_hi: f64, low_hi: Option<f64>, today: &str, pds: &[f64]) -> HandicapInput {
    HandicapInput {
        old_hi,
        low_hi,
        today_seconds: parse_mmss_strict(today).unwrap(),
        pd_history: pds.to_vec(),
    }
}

#[test]
fn test_pd_from_time_against_baseline() {
    let c = course();
    assert_eq!(pd_from_time(1200, &c), 0.0);
    assert_eq!(pd_from_time(1205, &c), 1.0);
    assert_eq!(pd_from_time(1195, &c), -1.0);
    assert_eq!(pd_from_time(1203, &c), 0.6);
}

#[test]
fn test_rounding_follows_half_up() {
    assert_eq!(round10(62.6), 60.0);
    assert_eq!(round10(15.0), 20.0);
    assert_eq!(round10(-15.0), -10.0);
    assert_eq!(round10(-16.0), -20.0);
    assert_eq!(round1(0.25), 0.3);
}

#[test]
fn test_hi_from_pds_empty_is_zero() {
    assert_eq!(hi_from_pds(&[]), 0.0);
    assert_eq!(hi_from_pds(&[120.0, 26.0]), 73.0);
}

#[test]
fn test_exceptional_cut_only_when_beating_hi() {
    let c = course();
    assert!((exceptional_cut(26.0, 130.0, &c) - 10.4).abs() < 1e-9);
    assert_eq!(exceptional_cut(130.0, 130.0, &c), 0.0);
    assert_eq!(exceptional_cut(140.0, 130.0, &c), 0.0);
}

#[test]
fn test_large_bonus_floors_hi_at_zero() {
    let out = compute_handicap(&input(150.0, None, "20:00", &[]), &course());
    assert_eq!(out.pd_today, 0.0);
    assert!((out.bonus - 15.0).abs() < 1e-9);
    assert!(out.hi_raw < 0.0);
    assert_eq!(out.new_hi, 0.0);
    assert!(out.new_hi.is_sign_positive());
}

#[test]
fn test_typical_update() {
    let out = compute_handicap(&input(130.0, None, "22:10", &[120.0]), &course());
    assert_eq!(out.pd_today, 26.0);
    assert_eq!(out.hi_raw_base, 73.0);
    assert_eq!(out.hi_raw, 60.0);
    assert_eq!(out.new_hi, 60.0);
}

#[test]
fn test_rise_is_capped_by_low_hi() {
    let c = course();
    // A slow run would push HI to 220, but the rise is limited to low HI + 30.
    let out = compute_handicap(&input(100.0, Some(80.0), "38:20", &[200.0, 220.0]), &c);
    assert_eq!(out.pd_today, 220.0);
    assert_eq!(out.hi_raw, 210.0);
    assert_eq!(out.new_hi, 110.0);

    let out = compute_handicap(&input(100.0, None, "38:20", &[200.0, 220.0]), &c);
    assert_eq!(out.new_hi, 130.0);

    // A low HI above the previous HI does not loosen the cap.
    let out = compute_handicap(&input(100.0, Some(150.0), "38:20", &[200.0, 220.0]), &c);
    assert_eq!(out.new_hi, 130.0);
}

#[test]
fn test_apply_caps_bounds() {
    let c = course();
    for hi_raw in [-500.0, -10.0, 0.0, 40.0, 95.0, 130.0, 1000.0] {
        for low in [None, Some(50.0), Some(200.0)] {
            let capped = apply_caps(100.0, hi_raw, low, &c);
            let floor = low.map_or(100.0, |l: f64| l.min(100.0));
            assert!(capped >= 0.0);
            assert!(capped <= floor + 30.0);
        }
    }
}

#[test]
fn test_form_parses_valid_fields() {
    let form = HandicapForm {
        old_hi: " 130 ",
        low_hi: "",
        today: "22:10",
        pds: "120, , 110,",
    };
    let parsed = form.parse().unwrap();
    assert_eq!(parsed.old_hi, 130.0);
    assert_eq!(parsed.low_hi, None);
    assert_eq!(parsed.today_seconds, 1330);
    assert_eq!(parsed.pd_history, vec![120.0, 110.0]);
}

#[test]
fn test_form_validation_order() {
    let bad_everything = HandicapForm {
        old_hi: "abc",
        low_hi: "x",
        today: "22.10",
        pds: "1,zz",
    };
    assert_eq!(bad_everything.parse(), Err(CalcError::InvalidOldHi));

    let form = HandicapForm {
        old_hi: "",
        ..Default::default()
    };
    assert_eq!(form.parse(), Err(CalcError::InvalidOldHi));

    let form = HandicapForm {
        old_hi: "130",
        low_hi: "low",
        today: "22:10",
        pds: "",
    };
    assert_eq!(form.parse(), Err(CalcError::InvalidLowHi));

    let form = HandicapForm {
        old_hi: "130",
        low_hi: "",
        today: "22.10",
        pds: "",
    };
    assert_eq!(form.parse(), Err(CalcError::InvalidTime));

    let form = HandicapForm {
        old_hi: "130",
        low_hi: "120",
        today: "22:10",
        pds: "120, twelve",
    };
    assert_eq!(form.parse(), Err(CalcError::InvalidPd));
}

#[test]
fn test_error_messages_are_user_facing() {
    assert_eq!(
        CalcError::InvalidTime.to_string(),
        "Enter today's time as mm:ss (e.g. 22:10)."
    );
    assert_eq!(
        CalcError::InvalidPd.to_string(),
        "Unable to parse one or more PD entries."
    );
}
