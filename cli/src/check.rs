//! Built-in self check: a fixed set of traversal scenarios with known
//! answers, run by `enumerable check`.

use enumerable::{
    Combinator, Counter, EnumError, Operator, Pattern, Value, all, any, count, each,
    each_with_index, multiply_els, none, read, reduce, select, try_map,
};
use tracing::{debug, warn};

type Outcome = Result<bool, EnumError>;

pub struct Scenario {
    pub name: &'static str,
    run: fn() -> Outcome,
}

fn scenario(name: &'static str, run: fn() -> Outcome) -> Scenario {
    Scenario { name, run }
}

/// A scenario that gave the wrong answer (`error` is `None`) or raised.
pub struct Failure {
    pub name: &'static str,
    pub error: Option<EnumError>,
}

pub struct Summary {
    pub passed: usize,
    pub failed: Vec<Failure>,
}

pub fn scenarios() -> Vec<Scenario> {
    vec![
        scenario("each 0-1", each_collects_words),
        scenario("each 0-2", each_walks_range),
        scenario("each_with_index 0-1", each_with_index_maps_positions),
        scenario("select 0-1", select_evens),
        scenario("all? 0-1", || all(&ant_bear_cat()?, &min_len(3))),
        scenario("all? 0-2", || Ok(!all(&ant_bear_cat()?, &min_len(4))?)),
        scenario("any? 0-1", || any(&ant_bear_cat()?, &min_len(4))),
        scenario("any? 0-2", || Ok(!any(&ant_bear_cat()?, &min_len(5))?)),
        scenario("none? 0-1", none_of_length_five),
        scenario("none? 0-2", || Ok(!none(&ant_bear_cat()?, &min_len(4))?)),
        scenario("count 0-1", count_everything),
        scenario("map 0-1", map_squares),
        scenario("map 0-2", map_doubles),
        scenario("inject 0-1", inject_sum),
        scenario("inject 0-2", inject_longest_word),
        scenario("multiply_els 0-1", multiply_three),
    ]
}

/// Run the built-in scenarios.
pub fn run_all() -> Summary {
    run(scenarios())
}

/// Run `scenarios` in order, logging each outcome.
pub fn run(scenarios: Vec<Scenario>) -> Summary {
    let mut summary = Summary {
        passed: 0,
        failed: Vec::new(),
    };
    for scenario in scenarios {
        let name = scenario.name;
        match (scenario.run)() {
            Ok(true) => {
                debug!(scenario = name, "passed");
                summary.passed += 1;
            }
            Ok(false) => {
                warn!(scenario = name, "wrong result");
                summary.failed.push(Failure { name, error: None });
            }
            Err(e) => {
                warn!(scenario = name, error = %e, "raised");
                summary.failed.push(Failure {
                    name,
                    error: Some(e),
                });
            }
        }
    }
    summary
}

// ============================================================================
// Scenarios
// ============================================================================

fn ant_bear_cat() -> Result<Value, EnumError> {
    read("%w[ant bear cat]")
}

fn min_len(n: usize) -> Pattern<'static> {
    Pattern::predicate(move |word| word.length().is_some_and(|len| len >= n))
}

fn each_collects_words() -> Outcome {
    let words = read("%w[a b c]")?;
    let mut seen = Vec::new();
    each(&words, |item| seen.push(item.clone()))?;
    Ok(Value::array(seen) == words)
}

fn each_walks_range() -> Outcome {
    let mut seen = Vec::new();
    each(&read("(1..4)")?, |item| seen.push(item.clone()))?;
    let shifted = try_map(&Value::array(seen), |n| Operator::SUB.apply(n, &Value::int(1)))?;
    Ok(shifted == read("[0, 1, 2, 3]")?)
}

fn each_with_index_maps_positions() -> Outcome {
    let mut by_index = Vec::new();
    each_with_index(&read("[9, 8, 7, 6, 5, 4, 3, 2, 1]")?, |item, index| {
        by_index.push((Value::int(index as i64), item.clone()));
    })?;
    let expected =
        read("{0 => 9, 1 => 8, 2 => 7, 3 => 6, 4 => 5, 5 => 4, 6 => 3, 7 => 2, 8 => 1}")?;
    Ok(Value::hash_map(by_index) == expected)
}

fn select_evens() -> Outcome {
    Ok(select(&read("[1, 2, 3, 4, 5]")?, Value::is_even)? == read("[2, 4]")?)
}

fn none_of_length_five() -> Outcome {
    let five = Pattern::predicate(|word| word.length() == Some(5));
    none(&ant_bear_cat()?, &five)
}

fn count_everything() -> Outcome {
    Ok(count(&read("[1, 2, 4, 2]")?, &Counter::Everything)? == 4)
}

fn map_squares() -> Outcome {
    let squares = try_map(&read("(1..4)")?, |i| Operator::MUL.apply(i, i))?;
    Ok(squares == read("[1, 4, 9, 16]")?)
}

fn map_doubles() -> Outcome {
    let doubled = try_map(&read("[2, 4, 6]")?, |item| Operator::ADD.apply(item, item))?;
    Ok(doubled == read("[4, 8, 12]")?)
}

fn inject_sum() -> Outcome {
    let sum = Combinator::function(|acc, n| Operator::ADD.apply(&acc, n));
    Ok(reduce(&read("(5..10)")?, None, &sum)? == Value::int(45))
}

fn inject_longest_word() -> Outcome {
    let longest = Combinator::block(|memo, word| {
        if memo.length() > word.length() {
            memo
        } else {
            word.clone()
        }
    });
    Ok(reduce(&read("%w[cat sheep bear]")?, None, &longest)? == Value::string("sheep"))
}

fn multiply_three() -> Outcome {
    Ok(multiply_els(&read("[2, 4, 5]")?)? == Value::int(40))
}
