use clubmatch::{io, Club, Error, RecommenderConfig, Snapshot, Student};

const STUDENTS_CSV: &str = "\
StudentID,Name,Interest1,Interest2,Interest3
1,Alice,chess,music,
2,Bob,chess,art,
3,Cara,soccer,running,swimming
4,Dan,soccer,running,swimming
5,Eve,coding,robotics,math
6,Finn,coding,robotics,math
";

const CLUBS_CSV: &str = "\
ClubName,RelatedInterest
Chess Club,chess
Art Club,art
Football Club,soccer
Robotics Club,robotics
Poetry Society,poetry
Band,music
";

fn snapshot() -> Snapshot {
    let students = io::students_from_reader(STUDENTS_CSV.as_bytes()).unwrap();
    let clubs = io::clubs_from_reader(CLUBS_CSV.as_bytes()).unwrap();
    Snapshot::build(students, clubs, &RecommenderConfig::default()).unwrap()
}

#[test]
fn shared_cluster_aggregates_both_students() {
    let students = vec![
        Student::new(1, "Alice", [Some("chess".into()), Some("music".into()), None]),
        Student::new(2, "Bob", [Some("chess".into()), Some("art".into()), None]),
    ];
    let clubs = vec![Club::new("Chess Club", "chess"), Club::new("Art Club", "art")];
    let config = RecommenderConfig::default().with_n_clusters(1);
    let snap = Snapshot::build(students, clubs, &config).unwrap();
    assert_eq!(snap.cluster_of(1), snap.cluster_of(2));

    let recs = snap.recommend(&[1]);
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].club_name, "Chess Club");
    assert_eq!(recs[0].frequency, 2);
    assert_eq!(recs[1].club_name, "Art Club");
    assert_eq!(recs[1].frequency, 1);
}

#[test]
fn csv_population_clusters_by_interest() {
    let snap = snapshot();
    assert_eq!(snap.n_clusters(), 3);
    assert_eq!(snap.cluster_of(3), snap.cluster_of(4));
    assert_eq!(snap.cluster_of(5), snap.cluster_of(6));
    assert_ne!(snap.cluster_of(3), snap.cluster_of(5));
    assert_eq!(snap.combined_interests(1), Some("chess music nan"));
}

#[test]
fn unmatched_interest_never_recommended() {
    let snap = snapshot();
    let ids: Vec<u64> = snap.students().map(|s| s.id).collect();
    for &id in &ids {
        assert!(snap.recommend(&[id]).iter().all(|r| r.club_name != "Poetry Society"));
    }
    assert!(snap.recommend(&ids).iter().all(|r| r.club_name != "Poetry Society"));
}

#[test]
fn adding_a_cluster_mate_keeps_the_pool() {
    let snap = snapshot();
    assert_eq!(snap.cluster_of(3), snap.cluster_of(4));
    assert_eq!(snap.recommend(&[3]), snap.recommend(&[3, 4]));

    let single = snap.recommend(&[3]);
    let wider = snap.recommend(&[3, 5]);
    for r in &single {
        assert!(wider.contains(r));
    }
    assert!(wider.len() > single.len());
}

#[test]
fn empty_and_unknown_queries() {
    let snap = snapshot();
    assert!(snap.recommend(&[]).is_empty());
    assert!(matches!(snap.try_recommend(&[]), Err(Error::EmptyQuery)));
    assert!(snap.recommend(&[1000]).is_empty());
}

#[test]
fn recommend_is_idempotent() {
    let snap = snapshot();
    assert_eq!(snap.recommend(&[1, 5]), snap.recommend(&[1, 5]));
}

#[test]
fn too_many_clusters_is_a_configuration_error() {
    let students = io::students_from_reader(STUDENTS_CSV.as_bytes()).unwrap();
    let config = RecommenderConfig::default().with_n_clusters(7);
    let err = Snapshot::build(students, Vec::new(), &config).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn club_reports() {
    let snap = snapshot();
    let board = snap.club_leaderboard();
    assert_eq!(board.len(), 6);
    assert!(board.iter().all(|e| e.demand == 1));
    assert_eq!(board[0].related_interest, "art");

    let buckets = snap.club_pseudo_clusters();
    assert!(buckets.iter().all(|b| b.bucket == 0 && b.count == 1));
}

#[test]
fn interested_students_for_a_club() {
    let snap = snapshot();
    let names: Vec<&str> = snap
        .students_interested_in("Chess Club")
        .iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}
