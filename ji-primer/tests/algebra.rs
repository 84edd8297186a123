use ji_primer::{
    diff1, diff2, special_relationships, stack, Interval, IntervalError, OCTAVE,
};

fn intervals() -> Vec<Interval> {
    let mut intervals = Vec::new();
    for numer in 1_u64..=24 {
        for denom in 1_u64..=24 {
            intervals.push(Interval::new(numer, denom).unwrap());
        }
    }
    intervals
}

#[test]
fn reverse_is_involution() {
    for x in intervals() {
        assert_eq!(x.reverse().reverse(), x);
        assert_eq!(x.multiply(&x.reverse()).unwrap(), Interval::unison());
    }
}

#[test]
fn add_is_multiply() {
    let all = intervals();
    for a in all.iter().step_by(7) {
        for b in all.iter().step_by(11) {
            assert_eq!(a.add(b), a.multiply(b));
            assert_eq!(a.add(b), b.add(a));
        }
    }
}

#[test]
fn complement_fills_octave() {
    let within = intervals()
        .into_iter()
        .filter(|x| *x >= Interval::unison() && *x < *OCTAVE)
        .collect::<Vec<_>>();
    assert!(!within.is_empty());
    for x in within {
        assert!(x.is_within_octave());
        let complement = x.complement().unwrap();
        assert_eq!(complement.multiply(&x).unwrap(), Interval::octave());
        assert_eq!(complement.add(&x).unwrap(), *OCTAVE);
    }
}

#[test]
fn complement_out_of_range() {
    for x in intervals() {
        if x >= *OCTAVE || x < Interval::unison() {
            assert!(matches!(
                x.complement(),
                Err(IntervalError::InvalidOperand { .. })
            ));
            assert!(matches!(
                x.subtract(&Interval::unison()),
                Err(IntervalError::InvalidOperand { .. })
            ));
        }
    }
}

#[test]
fn superparticular() {
    for n in 2_u64..200 {
        assert!(Interval::new(n, n - 1).unwrap().is_superparticular());
        assert!(!Interval::new(n - 1, n).unwrap().is_superparticular());
    }
    assert!(!Interval::unison().is_superparticular());
    assert!(!Interval::new(5, 3).unwrap().is_superparticular());
    // 6/4 reduces to 3/2
    assert!(Interval::new(6, 4).unwrap().is_superparticular());
}

#[test]
fn subtract_fifth_from_large_interval() {
    let fifth = Interval::new(3, 2).unwrap();
    let twelfth = Interval::new(3, 1).unwrap();
    assert!(matches!(
        twelfth.subtract(&fifth),
        Err(IntervalError::InvalidOperand {
            operation: "subtract",
            ..
        })
    ));
    assert_eq!(fifth.subtract(&fifth).unwrap(), Interval::unison());
}

#[test]
fn hertz() {
    let fifth = Interval::new(3, 2).unwrap();
    assert_eq!(fifth.to_hz(264_u64), 396);
    // truncated, not rounded
    assert_eq!(Interval::new(5, 3).unwrap().to_hz(None), 440);
    assert_eq!(Interval::new(7, 4).unwrap().to_hz(None), 462);
    assert_eq!(Interval::new(15, 8).unwrap().to_hz(101_u64), 189);
}

#[test]
fn catalog_difference_tones() {
    let within = special_relationships()
        .into_iter()
        .filter(|rel| rel.interval.is_within_octave())
        .map(|rel| rel.interval)
        .collect::<Vec<_>>();
    assert_eq!(within.len(), 9);
    for f1 in within.iter() {
        for f2 in within.iter() {
            let tone = diff1(f1, f2).unwrap();
            assert_eq!(tone.multiply(f2).unwrap(), *f1);
        }
    }
}

#[test]
fn stacked_fifths_overflow() {
    let fifth = Interval::new(3, 2).unwrap();
    let fifths = vec![fifth; 40];
    let stacked = stack(&fifths).unwrap();
    assert_eq!(stacked, fifth.pow(40).unwrap());
    assert!(matches!(
        stacked.add(&fifth),
        Err(IntervalError::Overflow(_))
    ));
    assert!(matches!(fifth.pow(41), Err(IntervalError::Overflow(_))));
    // the squared operand overflows before subtraction
    let near_octave = Interval::new(4_294_967_311, 4_294_967_291).unwrap();
    assert!(matches!(
        diff2(&near_octave, &fifth),
        Err(IntervalError::Overflow(_))
    ));
}
