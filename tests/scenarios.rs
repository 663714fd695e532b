use either::Either;
use lazyseq::prelude::*;

#[test]
fn test_sequence_from_common_sources() {
    assert_eq!(Sequence::new(vec![1, 2, 3]).collect(), vec![1, 2, 3]);
    assert_eq!(Sequence::new("abcd").collect(), vec!['a', 'b', 'c', 'd']);

    let array_like = Source::array_like(2, |i| i == 0).unwrap();
    assert_eq!(Sequence::new(array_like).collect(), vec![true, false]);

    let generator = Source::from_fn(|| 1..=3);
    assert_eq!(Sequence::new(generator).collect(), vec![1, 2, 3]);
}

#[test]
fn test_join_and_for_each() {
    let seq = Sequence::new(vec![1, 2, 3]);
    assert_eq!(seq.join(":"), "1:2:3");
    assert_eq!(seq.concat(), "123");

    let mut calls = Vec::new();
    Sequence::new("abc").for_each(|c, index| calls.push((c, index)));
    assert_eq!(calls, vec![('a', 0), ('b', 1), ('c', 2)]);
}

#[test]
fn test_ranges() {
    assert_eq!(range(5_i32).collect(), vec![0, 1, 2, 3, 4]);
    assert_eq!(range((2_i32, 5)).collect(), vec![2, 3, 4]);
    assert_eq!(range((0_i32, 2, 5)).collect(), vec![0, 2, 4]);
    assert_eq!(range((5_i32, 4, 0)).collect(), vec![5, 4, 3, 2, 1]);
    assert_eq!(range_step(0_i32, 5, 2).collect(), vec![0, 2, 4]);
    assert_eq!(range_step(5_i32, 0, -1).collect(), vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_zip_string_with_unbounded_range() {
    let pairs = zip("boom", range(f64::INFINITY));
    assert_eq!(
        pairs.collect(),
        vec![('b', 0.0), ('o', 1.0), ('o', 2.0), ('m', 3.0)]
    );
}

#[test]
fn test_zip_method_and_function_agree() {
    let free = zip("abc", vec![1, 2, 3]).collect();
    let method = Sequence::new("abc").zip(vec![1, 2, 3]).collect();
    assert_eq!(free, vec![('a', 1), ('b', 2), ('c', 3)]);
    assert_eq!(method, free);
    assert_eq!(zip(vec![1, 2], vec![1, 2, 3]).collect(), vec![(1, 1), (2, 2)]);
}

#[test]
fn test_take_from_unbounded_range() {
    assert_eq!(take(range(f64::INFINITY), 3).collect(), vec![0.0, 1.0, 2.0]);
}

#[test]
fn test_predicates_with_index() {
    let source = vec![1_usize, 2, 3, 0];
    let below = |value: &usize, index: usize| *value + index <= 3;

    assert_eq!(filter(source.clone(), below).collect(), vec![1, 2, 0]);
    assert_eq!(take_while(source.clone(), below).collect(), vec![1, 2]);
    assert_eq!(drop_while(source.clone(), below).collect(), vec![3, 0]);
    assert_eq!(Sequence::new(source).drop_while(below).collect(), vec![3, 0]);
}

#[test]
fn test_flat_map_value_and_index() {
    let seq = flat_map(vec![1_usize, 2, 3], |value, index| vec![value, index]);
    assert_eq!(seq.collect(), vec![1, 0, 2, 1, 3, 2]);
}

#[test]
fn test_map_value_plus_index() {
    let seq = Sequence::new(vec![1_usize, 2, 3]).map(|value, index| value + index);
    assert_eq!(seq.collect(), vec![1, 3, 5]);
}

#[test]
fn test_take_and_drop_clamp() {
    let source = Sequence::new(vec![1, 2, 3, 4]);
    assert_eq!(source.clone().take(2).collect(), vec![1, 2]);
    assert_eq!(source.clone().take(6).collect(), vec![1, 2, 3, 4]);
    assert_eq!(source.clone().drop(2).collect(), vec![3, 4]);
    assert!(source.drop(6).collect().is_empty());
}

#[test]
fn test_append_mixed_element_types() {
    let seq = Sequence::new("abc").append_either(vec![1, 2, 3]);
    let rendered = seq.map(|side, _| match side {
        Either::Left(c) => c.to_string(),
        Either::Right(n) => n.to_string(),
    });
    assert_eq!(rendered.join(","), "a,b,c,1,2,3");
}

#[test]
fn test_repeat_sequence_and_value() {
    assert_eq!(repeat("abc", Some(2)).concat(), "abcabc");
    assert_eq!(Sequence::new("abc").repeat(Some(2)).concat(), "abcabc");
    assert_eq!(Sequence::new(vec![1]).cycle().take(3).collect(), vec![1, 1, 1]);
    assert_eq!(repeat_value(1, Some(5)).collect(), vec![1, 1, 1, 1, 1]);
}

#[test]
fn test_reduce_sums() {
    let sum = |acc: i32, value: i32, _| acc + value;
    assert_eq!(reduce(vec![1, 2, 3], sum), Some(6));
    assert_eq!(Sequence::new(vec![1, 2, 3]).reduce(sum), Some(6));
    assert_eq!(reduce(Source::array_like(1, |_| 1).unwrap(), sum), Some(1));
    assert_eq!(reduce(Source::from_fn(|| [1, 2]), sum), Some(3));
    assert_eq!(reduce(Vec::new(), sum), None);
}

#[test]
fn test_pipeline_is_reiterable() {
    let pipeline = range(u32::MAX)
        .filter(|n, _| n % 3 == 0)
        .map(|n, _| n * 2)
        .take(4);
    assert_eq!(pipeline.collect(), vec![0, 6, 12, 18]);
    assert_eq!(pipeline.collect(), pipeline.iter().collect::<Vec<_>>());
}

#[test]
fn test_fallible_pipeline() {
    let parsed = Sequence::new(vec!["4", "x", "6"]).map(|s, _| s.parse::<i32>());
    assert!(parsed.try_collect().is_err());

    let parsed = Sequence::new(vec!["4", "5"]).map(|s, _| s.parse::<i32>());
    assert_eq!(parsed.try_collect(), Ok(vec![4, 5]));
}

#[cfg(feature = "json")]
#[test]
fn test_json_array_like() {
    use serde_json::json;

    let seq = lazyseq::from_json(&json!({"0": true, "1": false, "length": 2})).unwrap();
    assert_eq!(seq.collect(), vec![json!(true), json!(false)]);
    assert!(lazyseq::from_json(&json!(1)).is_err());
}
