// Walkthrough of the combinators on small in-memory data
//
// Each section replaces an explicit loop with a combinator and prints the
// result. Set SEQOPS_LOG_FORMAT=json and RUST_LOG=seqops=debug to see the
// per-stage pipeline logs.

use seqops::config::ToolkitConfig;
use seqops::prelude::*;
use seqops::utils::logging::init_tracing;

fn main() -> Result<(), SequenceError> {
    let config = ToolkitConfig::from_env();
    init_tracing(&config);

    println!("=== Mapping ===");
    let squares = Sequence::from(vec![9.0_f64, 16.0, 25.0]);
    println!("sqrt of {:?}: {:?}", squares.to_vec(), map(&squares, |x| x.sqrt()).to_vec());

    let xs: Sequence<i64> = vec![1, 2, 3].into();
    let powers = map2(&xs, &xs, |base, exp| base.pow(*exp as u32))?;
    println!("x ^ x: {:?}", powers.to_vec());

    let scores = Sequence::named([("ada", 3), ("alan", 5), ("grace", 4)]);
    for line in imap(&scores, |score, key| format!("{} scored {}", key, score)) {
        println!("  {}", line);
    }

    println!("\n=== Filtering ===");
    let teens: Sequence<i64> = (11..=20).collect();
    println!("evens: {:?}", keep(&teens, |x| x % 2 == 0).to_vec());
    println!("odds:  {:?}", discard(&teens, |x| x % 2 == 0).to_vec());
    println!(
        "every > 10: {}, some > 19: {}, has 15: {}",
        every(&teens, |x| *x > 10),
        some(&teens, |x| *x > 19),
        has_element(&teens, &15)
    );
    println!(
        "first multiple of 7: {:?} at position {:?}",
        detect(&teens, |x| x % 7 == 0),
        detect_index(&teens, |x| x % 7 == 0)
    );

    println!("\n=== Modifying ===");
    println!(
        "zero at 1, 3, 5: {:?}",
        modify_at(&teens, &[1, 3, 5], |_| 0)?.to_vec()
    );
    println!(
        "negate evens: {:?}",
        modify_if(&teens, |x| x % 2 == 0, |x| -x).to_vec()
    );

    println!("\n=== Plucking ===");
    let letters = Value::record([
        ("lowers", Value::list(('a'..='z').map(Value::from))),
        ("uppers", Value::list(('A'..='Z').map(Value::from))),
    ]);
    println!("lowers[2] = {}", pluck(&letters, &path!["lowers", 2usize])?);
    match pluck(&letters, &path!["digits"]) {
        Ok(value) => println!("digits = {}", value),
        Err(err) => println!("digits: {}", err),
    }

    println!("\n=== Reshaping ===");
    let rows: Sequence<Value> = vec![
        Value::record([("x", 1), ("y", 10)]),
        Value::record([("x", 2), ("y", 20)]),
    ]
    .into();
    for (name, column) in transpose_values(&rows)?.entries() {
        println!("  {} -> {}", name.unwrap_or("?"), column);
    }
    let nested: Sequence<Value> = vec![Value::list([1, 2]), Value::from(3), Value::list([4])].into();
    println!("flattened: {}", Value::List(flatten_values(&nested)));

    println!("\n=== Pipeline ===");
    let pipeline = Pipeline::new((1..=100).collect::<Sequence<i32>>())
        .map(|x| x * 2)
        .keep(|x| x % 4 == 0)
        .map(|x| x / 2)
        .sort();
    for (index, metrics) in pipeline.metrics().iter().enumerate() {
        println!("Stage {}: {}", index + 1, metrics);
    }
    let summary = pipeline.metrics_summary();
    println!(
        "{} stages, {} -> {} elements in {:?}",
        summary.stage_count, summary.input_len, summary.output_len, summary.total_time
    );
    println!("sum of result: {:?}", pipeline.reduce(|acc, x| acc + x));

    Ok(())
}
