use colshape3d::shape::{Ellipsoid, Shape};
use colshape3d::utils::profiler::{self, ProfilerError};

// The only test of this binary touching the process-wide profiler.
#[test]
fn global_profiler_records_nested_sections() {
    profiler::start();

    profiler::begin("Section 1").unwrap();
    let mut ellipsoid = Ellipsoid::new(1.0, 2.0, 3.0);
    profiler::begin("Section 1.1").unwrap();
    let _ = ellipsoid.update_local_bounds();
    profiler::end("Section 1.1").unwrap();
    profiler::end("Section 1").unwrap();

    profiler::begin("Section 2").unwrap();
    let _ = ellipsoid.compute_moment_of_inertia();
    assert_eq!(
        profiler::end("Section 1"),
        Err(ProfilerError::Mismatch {
            expected: "Section 2".to_owned(),
            found: "Section 1".to_owned(),
        })
    );
    profiler::end("Section 2").unwrap();
    profiler::stop().unwrap();

    let sections = profiler::sections();
    let names: Vec<_> = sections.iter().map(|s| (s.name.as_str(), s.depth)).collect();
    assert_eq!(
        names,
        [("Section 1", 0), ("Section 1.1", 1), ("Section 2", 0)]
    );
    assert!(sections.iter().all(|s| s.calls == 1));

    let mut report = Vec::new();
    profiler::status(&mut report).unwrap();
    let report = String::from_utf8(report).unwrap();
    assert_eq!(report.lines().count(), 4);
    assert!(report.contains("    Section 1.1: 1 call(s)"));

    assert_eq!(profiler::begin("late"), Err(ProfilerError::NotRunning));
}
