//! Build a snapshot and print recommendations and club reports.
//!
//! ```text
//! cargo run --example recommend -- students.csv clubs.csv 1 2
//! cargo run --example recommend
//! ```
//!
//! With no arguments a small built-in population is used. `CLUBMATCH_CONFIG` may
//! point at a JSON file with any subset of the `RecommenderConfig` fields.

use std::env;
use std::process::ExitCode;

use clubmatch::{io, Club, RecommenderConfig, Snapshot, Student, StudentId};
use log::error;

fn sample() -> (Vec<Student>, Vec<Club>) {
    let s = |id, name: &str, a: &str, b: &str, c: Option<&str>| {
        Student::new(
            id,
            name,
            [Some(a.to_string()), Some(b.to_string()), c.map(str::to_string)],
        )
    };
    let students = vec![
        s(1, "Alice", "chess", "music", None),
        s(2, "Bob", "chess", "art", None),
        s(3, "Cara", "soccer", "running", Some("swimming")),
        s(4, "Dan", "soccer", "running", Some("hiking")),
        s(5, "Eve", "coding", "robotics", Some("math")),
        s(6, "Finn", "coding", "math", Some("chess")),
    ];
    let clubs = vec![
        Club::new("Chess Club", "chess"),
        Club::new("Art Club", "art"),
        Club::new("Band", "music"),
        Club::new("Football Club", "soccer"),
        Club::new("Outdoor Club", "hiking"),
        Club::new("Robotics Club", "robotics"),
        Club::new("Math Circle", "math"),
        Club::new("Poetry Society", "poetry"),
    ];
    (students, clubs)
}

fn run(args: &[String]) -> clubmatch::Result<()> {
    let (students, clubs, query) = match args {
        [students, clubs, ids @ ..] => {
            let query: Vec<StudentId> = ids.iter().filter_map(|s| s.parse().ok()).collect();
            (io::read_students(students)?, io::read_clubs(clubs)?, query)
        }
        _ => {
            let (students, clubs) = sample();
            (students, clubs, vec![1])
        }
    };

    let config = match env::var("CLUBMATCH_CONFIG") {
        Ok(path) => RecommenderConfig::load(path)?,
        Err(_) => RecommenderConfig::default(),
    };
    let snapshot = Snapshot::build(students, clubs, &config)?;

    println!("=== Students ===");
    for s in snapshot.students() {
        println!("  {:>4}  {:<12} cluster {}", s.id, s.name, s.cluster);
    }

    println!("\n=== Recommendations for {:?} ===", query);
    let recs = snapshot.recommend(&query);
    if recs.is_empty() {
        println!("  (none)");
    }
    for r in &recs {
        println!("  {:<20} {:<12} {}", r.club_name, r.related_interest, r.frequency);
    }

    println!("\n=== Interest distribution ===");
    for (token, count) in snapshot.interest_distribution(&query) {
        println!("  {:<12} {}", token, count);
    }

    println!("\n=== Club popularity buckets ===");
    for b in snapshot.club_pseudo_clusters() {
        println!("  {:<12} count {} bucket {}", b.related_interest, b.count, b.bucket);
    }

    println!("\n=== Demand leaderboard ===");
    for e in snapshot.club_leaderboard() {
        println!("  {:<12} {}", e.related_interest, e.demand);
    }

    if let Some(club) = snapshot.club_names().first() {
        println!("\n=== Students interested in {club} ===");
        for s in snapshot.students_interested_in(club) {
            println!("  {:<12} {}", s.name, s.combined_interests);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
