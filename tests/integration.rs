use chrono::DateTime;
use num_traits::ToPrimitive;
use perfect_time::{
    is_canonical, MutablePerfectTime, PerfectTime, PerfectTimeError, TimePrecision,
};
use TimePrecision::*;

fn pt(time: impl perfect_time::TimeLiteral, precision: TimePrecision) -> PerfectTime {
    PerfectTime::new(time, precision).unwrap()
}

#[test]
fn millisecond_timestamp_is_padded_to_attoseconds() {
    let t = pt(1_456_021_196_012_i64, Milliseconds);
    assert_eq!(t.as_str(), "1456021196.012000000000000000");
    assert!(is_canonical(t.as_str()));
}

#[test]
fn one_day_reads_back_as_86400_seconds() {
    assert_eq!(pt(1, Days).as_unit(Seconds), "86400.000000000000000000");
}

#[test]
fn canonical_strings_survive_reconstruction() {
    let inputs = [
        pt(0, Seconds),
        pt(-1, Seconds),
        pt("3.14159265358979323846264338327950288", Seconds),
        pt(7, Years),
        pt("-2.5", Centuries),
        pt(1, Attoseconds),
        PerfectTime::now(),
    ];
    for t in inputs {
        let again = pt(t.as_str(), Seconds);
        assert_eq!(again.as_str(), t.as_str());
        assert_eq!(again, t);
    }
}

#[test]
fn subsecond_units_round_trip_exactly() {
    let t = pt("-1234567.123456789123456789", Seconds);
    for unit in TimePrecision::ALL.into_iter().filter(|u| u.is_subsecond()) {
        let back = pt(t.as_unit(unit), unit);
        assert_eq!(back, t, "{unit:?}");
    }
}

#[test]
fn coarse_units_round_trip_within_the_output_precision() {
    let t = pt("1456021196.012345678901234567", Seconds);
    for unit in [Days, Years, Centuries, Millennia] {
        let back = pt(t.as_unit(unit), unit);
        let drift = &back - &t;
        let drift = if drift.is_negative() { -drift } else { drift };
        // one attounit of the target unit, plus the final rounding
        let bound = pt(unit.seconds_per_unit(), Attoseconds).offset(1, Attoseconds).unwrap();
        assert!(drift <= bound, "{unit:?}: drift {drift}");
    }
}

#[test]
fn same_input_gives_byte_identical_output() {
    let a = std::thread::spawn(|| pt("0.333333333333333333333333", Days).into_string());
    let b = std::thread::spawn(|| pt("0.333333333333333333333333", Days).into_string());
    assert_eq!(a.join().unwrap(), b.join().unwrap());
}

#[test]
fn malformed_input_reports_parse_error() {
    let err = PerfectTime::new("1.5e3", Seconds).unwrap_err();
    assert!(matches!(err, PerfectTimeError::Parse(_)));
    assert_eq!(
        err.to_string(),
        "invalid time literal: unexpected character 'e' at byte 3"
    );
}

#[test]
fn lossy_coercions() {
    let t = pt("1456021196.987654321987654321", Seconds);
    assert_eq!(t.to_i32(), Some(1_456_021_196));
    assert_eq!(t.to_i64(), Some(1_456_021_196));
    assert_eq!(t.to_f64(), Some(1_456_021_196.987_654_3));
    assert_eq!(t.to_f32(), Some(1_456_021_200.0_f32));
}

#[test]
fn chrono_interop_is_exact_to_the_nanosecond() {
    let dt = DateTime::from_timestamp(-86_400, 1).unwrap();
    let t = PerfectTime::from(dt);
    assert_eq!(t.as_str(), "-86399.999999999000000000");
    assert_eq!(t.to_utc(), Some(dt));
    assert_eq!(t.as_unit(Days), "-0.999999999999988426");
}

#[test]
fn now_is_millisecond_grained() {
    let t = PerfectTime::now();
    assert!(t.fractional_part().ends_with("000000000000000"));
    // 2020-01-01T00:00:00Z
    assert!(t > pt(1_577_836_800, Seconds));
}

#[test]
fn mutable_holder_swaps_whole_values() {
    let mut holder = MutablePerfectTime::from(pt(10, Seconds));
    holder.set_value("0.5", Days).unwrap();
    assert_eq!(holder.as_str(), "43200.000000000000000000");
    assert!(holder.set_value(f64::NAN, Seconds).is_err());
    assert_eq!(PerfectTime::from(holder).as_str(), "43200.000000000000000000");
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_the_canonical_string() {
    let t = pt(1_456_021_196_012_i64, Milliseconds);
    let json = serde_json::to_string(&t).unwrap();
    assert_eq!(json, "\"1456021196.012000000000000000\"");
    let back: PerfectTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);

    let loose: PerfectTime = serde_json::from_str("\"-1.5\"").unwrap();
    assert_eq!(loose.as_str(), "-1.500000000000000000");
    assert!(serde_json::from_str::<PerfectTime>("\"1e3\"").is_err());

    let holder = MutablePerfectTime::from(t);
    assert_eq!(serde_json::to_string(&holder).unwrap(), json);
    assert_eq!(serde_json::to_string(&Milliseconds).unwrap(), "\"Milliseconds\"");
}
