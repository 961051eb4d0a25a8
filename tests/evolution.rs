//! End-to-end runs of the evolver with seeded random sources.

use queens_ga::ga::{
    evaluate, Candidate, EvolutionResult, Evolver, EvolverConfig, EvolverState, BOARD_SIZE,
    MAX_FITNESS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn run_seed(seed: u64) -> (EvolutionResult, String) {
    let mut evolver = Evolver::new(EvolverConfig::default(), StdRng::seed_from_u64(seed)).unwrap();
    let mut out = Vec::new();
    let result = evolver.run(&mut out).unwrap();
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_canonical_board_is_solved() {
    let rows = [0, 4, 7, 5, 2, 6, 1, 3];
    assert_eq!(evaluate(&rows), MAX_FITNESS);
    assert!(Candidate::from_rows(rows).unwrap().is_solution());
}

#[test]
fn test_seeded_run_reaches_solution() {
    // Default parameters solve roughly one run in three, so scan seeds
    // until one does, then check that it solves again deterministically.
    let seed = (0..64u64)
        .find(|&seed| run_seed(seed).0.state == EvolverState::Solved)
        .expect("no seed in 0..64 reached a solution");

    let (result, text) = run_seed(seed);
    assert_eq!(result.state, EvolverState::Solved);
    assert!(result.best.is_solution());
    assert_eq!(evaluate(result.best.rows()), MAX_FITNESS);
    assert!(result.generations <= 1000);
    // Either a reported generation was solved, or the population bred after
    // the last reported generation was.
    assert!(
        result.fitness_history.last() == Some(&MAX_FITNESS) || result.generations == 1000,
        "solved run ended early without a solved generation"
    );
    assert!(text.ends_with(&format!("Best solution found:\n{}\n", result.best)));

    let (again, _) = run_seed(seed);
    assert_eq!(again.best, result.best);
    assert_eq!(again.generations, result.generations);
}

#[test]
fn test_runs_stop_by_cap_or_solution() {
    for seed in 0..4 {
        let (result, _) = run_seed(seed);
        match result.state {
            EvolverState::Solved => assert!(result.best.is_solution()),
            EvolverState::Exhausted => {
                assert_eq!(result.generations, 1000);
                assert!(!result.best.is_solution());
            }
            EvolverState::Running => panic!("run returned while still running"),
        }
    }
}

#[test]
fn test_report_format() {
    let config = EvolverConfig::default().with_max_generations(3);
    let mut evolver = Evolver::new(config, StdRng::seed_from_u64(1)).unwrap();
    let mut out = Vec::new();
    let result = evolver.run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let mut lines = text.lines();
    for n in 0..result.generations {
        assert_eq!(lines.next(), Some(format!("Generation {n}:").as_str()));
        for _ in 0..BOARD_SIZE {
            let row = lines.next().unwrap();
            let tokens: Vec<&str> = row.split_terminator(' ').collect();
            assert_eq!(tokens.len(), BOARD_SIZE);
            assert_eq!(tokens.iter().filter(|&&t| t == "Q").count(), 1);
            assert!(tokens.iter().all(|&t| t == "Q" || t == "."));
        }
        let fitness = lines.next().unwrap();
        assert!(fitness.starts_with("Fitness: "));
    }
    assert_eq!(lines.next(), Some("Best solution found:"));
    for _ in 0..BOARD_SIZE {
        lines.next().unwrap();
    }
    assert_eq!(
        lines.next(),
        Some(format!("Fitness: {}", result.best.fitness()).as_str())
    );
    assert_eq!(lines.next(), None);
}
