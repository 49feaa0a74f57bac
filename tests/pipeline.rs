use gfreq::{
    network::Network,
    orbits::OrbitMatrix,
    orca::{OrbitCounter, OrcaError},
    task::{batch, convert, recompute_freq, CountTask, TaskError},
    types::{NUM_GRAPHLETS, NUM_ORBITS},
};
use std::fs;

const TRIANGLE_GW: &str = "\
LEDA.GRAPH
string
short
-2
3
|{a}|
|{b}|
|{c}|
3
1 2 0 |{}|
2 3 0 |{}|
1 3 0 |{}|
";

/// Returns a fixed matrix regardless of the network, as a stand-in for the
/// external orbit counter.
struct StubCounter {
    rows: Vec<Vec<f64>>,
}

impl OrbitCounter for StubCounter {
    fn count(&self, _network: &Network) -> Result<OrbitMatrix, OrcaError> {
        Ok(OrbitMatrix::from_rows(self.rows.clone()).unwrap())
    }
}

fn triangle_row() -> Vec<f64> {
    // Each triangle node has degree 2 (orbit 0) and sits in one triangle
    // (orbit 3).
    let mut row = vec![0.0; NUM_ORBITS];
    row[0] = 2.0;
    row[3] = 1.0;
    row
}

fn triangle_ndump2() -> String {
    let counts: Vec<String> = triangle_row()
        .iter()
        .map(|&c| format!("{}", c as i64))
        .collect();
    ["a", "b", "c"]
        .iter()
        .map(|label| format!("{} {}\n", label, counts.join(" ")))
        .collect()
}

fn triangle_gr_freq() -> String {
    (0..NUM_GRAPHLETS)
        .map(|g| match g {
            0 => String::from("0\t3\n"),
            2 => String::from("2\t1\n"),
            g => format!("{}\t0\n", g),
        })
        .collect()
}

#[test]
fn test_count_task() {
    let dir = tempfile::tempdir().unwrap();
    let gw = dir.path().join("triangle.gw");
    fs::write(&gw, TRIANGLE_GW).unwrap();
    let counter = StubCounter {
        rows: vec![triangle_row(); 3],
    };
    CountTask::new(gw.as_path(), &counter).run().unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("triangle.ndump2")).unwrap(),
        triangle_ndump2()
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("triangle.gr_freq")).unwrap(),
        triangle_gr_freq()
    );
}

#[test]
fn test_count_task_alignment_failure() {
    let dir = tempfile::tempdir().unwrap();
    let gw = dir.path().join("triangle.gw");
    fs::write(&gw, TRIANGLE_GW).unwrap();
    // One row too few for a 3-node network simulates a counter that
    // reordered or dropped a node.
    let counter = StubCounter {
        rows: vec![triangle_row(); 2],
    };
    let result = CountTask::new(gw.as_path(), &counter).run();
    assert!(matches!(result, Err(TaskError::Alignment(_))));
    assert!(!dir.path().join("triangle.ndump2").exists());
}

#[test]
fn test_batch() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("one.gw"), TRIANGLE_GW).unwrap();
    fs::write(dir.path().join("two.gw"), TRIANGLE_GW).unwrap();
    fs::write(dir.path().join("notes.txt"), "skip me\n").unwrap();
    let counter = StubCounter {
        rows: vec![triangle_row(); 3],
    };
    assert_eq!(batch(dir.path(), &counter).unwrap(), 2);
    assert!(dir.path().join("one.gr_freq").exists());
    assert!(dir.path().join("two.gr_freq").exists());
    assert!(!dir.path().join("notes.gr_freq").exists());
}

#[test]
fn test_batch_tallies_failures() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("good.gw"), TRIANGLE_GW).unwrap();
    fs::write(dir.path().join("bad.gw"), "not a LEDA file\n").unwrap();
    let counter = StubCounter {
        rows: vec![triangle_row(); 3],
    };
    let result = batch(dir.path(), &counter);
    assert!(matches!(
        result,
        Err(TaskError::Batch {
            failed: 1,
            total: 2,
        })
    ));
    // The healthy network is still processed.
    assert!(dir.path().join("good.gr_freq").exists());
}

#[test]
fn test_convert() {
    let dir = tempfile::tempdir().unwrap();
    let txt = dir.path().join("net.txt");
    fs::write(&txt, "a\tb\nb\tc\na\ta\n").unwrap();
    let output = convert(&txt).unwrap();
    assert_eq!(output, dir.path().join("net.gw"));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "LEDA.GRAPH\nstring\nshort\n-2\n3\n|{a}|\n|{b}|\n|{c}|\n2\n1 2 0 |{}|\n2 3 0 |{}|\n"
    );
}

#[test]
fn test_recompute_freq() {
    let dir = tempfile::tempdir().unwrap();
    let ndump2 = dir.path().join("triangle.ndump2");
    fs::write(&ndump2, triangle_ndump2()).unwrap();
    let output = recompute_freq(&ndump2).unwrap();
    assert_eq!(output, dir.path().join("triangle.gr_freq"));
    assert_eq!(fs::read_to_string(&output).unwrap(), triangle_gr_freq());
}
