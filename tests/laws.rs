use lazyseq::prelude::*;

const ROUNDS: usize = 200;

fn random_vec(rng: &mut fastrand::Rng) -> Vec<i32> {
    let len = rng.usize(0..24);
    (0..len).map(|_| rng.i32(-50..50)).collect()
}

#[test]
fn test_map_identity() {
    let mut rng = fastrand::Rng::with_seed(297135646);
    for _ in 0..ROUNDS {
        let values = random_vec(&mut rng);
        assert_eq!(map(values.clone(), |v, _| v).collect(), values);
    }
}

#[test]
fn test_filter_constant_predicates() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..ROUNDS {
        let values = random_vec(&mut rng);
        assert_eq!(filter(values.clone(), |_, _| true).collect(), values);
        assert!(filter(values, |_, _| false).collect().is_empty());
    }
}

#[test]
fn test_filter_matches_iterator_filter() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..ROUNDS {
        let values = random_vec(&mut rng);
        let expected: Vec<i32> = values.iter().copied().filter(|v| v % 2 == 0).collect();
        assert_eq!(filter(values, |v, _| v % 2 == 0).collect(), expected);
    }
}

#[test]
fn test_take_length() {
    let mut rng = fastrand::Rng::with_seed(13);
    for _ in 0..ROUNDS {
        let values = random_vec(&mut rng);
        let n = rng.usize(0..32);
        assert_eq!(take(values.clone(), n).collect().len(), n.min(values.len()));
    }
}

#[test]
fn test_take_drop_partition() {
    let mut rng = fastrand::Rng::with_seed(17);
    for _ in 0..ROUNDS {
        let values = random_vec(&mut rng);
        let n = rng.usize(0..32);
        let seq = Sequence::new(values.clone());
        let joined = append(seq.clone().take(n), seq.drop(n));
        assert_eq!(joined.collect(), values);
    }
}

#[test]
fn test_take_while_drop_while_partition() {
    let mut rng = fastrand::Rng::with_seed(19);
    for _ in 0..ROUNDS {
        let values = random_vec(&mut rng);
        let limit = rng.i32(-50..50);
        let seq = Sequence::new(values.clone());
        let head = seq.clone().take_while(move |v, _| *v < limit);
        let tail = seq.drop_while(move |v, _| *v < limit);
        assert_eq!(append(head, tail).collect(), values);
    }
}

#[test]
fn test_zip_length() {
    let mut rng = fastrand::Rng::with_seed(23);
    for _ in 0..ROUNDS {
        let a = random_vec(&mut rng);
        let b = random_vec(&mut rng);
        let expected = a.len().min(b.len());
        assert_eq!(zip(a, b).collect().len(), expected);
    }
}

#[test]
fn test_reduce_matches_sum() {
    let mut rng = fastrand::Rng::with_seed(29);
    for _ in 0..ROUNDS {
        let values = random_vec(&mut rng);
        let expected = values.iter().copied().reduce(|a, b| a + b);
        assert_eq!(reduce(values, |acc, v, _| acc + v), expected);
    }
}

#[test]
fn test_repeat_length() {
    let mut rng = fastrand::Rng::with_seed(31);
    for _ in 0..ROUNDS {
        let values = random_vec(&mut rng);
        let times = rng.usize(0..5);
        let len = repeat(values.clone(), Some(times)).collect().len();
        assert_eq!(len, values.len() * times);
    }
}

#[test]
fn test_range_matches_std_range() {
    let mut rng = fastrand::Rng::with_seed(37);
    for _ in 0..ROUNDS {
        let start = rng.i64(-100..100);
        let stop = rng.i64(-100..100);
        let step = rng.i64(1..10);
        let expected: Vec<i64> = (start..stop).step_by(step as usize).collect();
        assert_eq!(range((start, start + step, stop)).collect(), expected);
        assert_eq!(range_step(start, stop, step).collect(), expected);
    }
}

#[test]
fn test_every_traversal_agrees() {
    let mut rng = fastrand::Rng::with_seed(41);
    for _ in 0..ROUNDS {
        let values = random_vec(&mut rng);
        let seq = Sequence::new(values)
            .flat_map(|v, i| vec![v; i % 3])
            .filter(|v, _| *v > 0)
            .map(|v, i| v * i as i32);
        assert_eq!(seq.collect(), seq.collect());
    }
}
