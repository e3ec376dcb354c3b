//! Concurrent population and querying of the stores.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use sensorgate_analysis::*;

#[test]
fn test_readers_see_monotonic_index_while_writer_adds() {
    let context = AnalysisContext::default();
    let optimizer = SensorOptimizer::from_context(&context);
    let done = Arc::new(AtomicBool::new(false));

    let writer = {
        let fs = context.fs.clone();
        let done = done.clone();
        std::thread::spawn(move || {
            for i in 0..2_000 {
                let language = if i % 2 == 0 { "java" } else { "php" };
                let path = format!("src/F{i}.{language}");
                fs.add(InputFile::new("foo", &path).with_language(language)).unwrap();
            }
            fs.add(
                InputFile::new("foo", "tests/LastTest.cbl")
                    .with_language("cobol")
                    .with_type(InputFileType::Test),
            )
            .unwrap();
            done.store(true, Ordering::SeqCst);
        })
    };

    let cobol_tests = SensorDescriptor::new()
        .only_on_languages(["cobol"])
        .only_on_file_type(InputFileType::Test);

    // Once a reader has seen the decision flip to true, it never flips back.
    (0..8).into_par_iter().for_each(|_| {
        let mut seen_len = 0;
        let mut seen_match = false;
        while !done.load(Ordering::SeqCst) {
            let len = context.fs.len();
            assert!(len >= seen_len);
            seen_len = len;

            let matched = optimizer.should_execute(&cobol_tests);
            assert!(matched || !seen_match);
            seen_match = matched;
        }
    });

    writer.join().unwrap();
    assert_eq!(context.fs.len(), 2_001);
    assert!(optimizer.should_execute(&cobol_tests));
}

#[test]
fn test_parallel_decisions_match_sequential() {
    let context = AnalysisContext::default();
    for i in 0..500 {
        let (language, file_type) = match i % 3 {
            0 => ("java", InputFileType::Main),
            1 => ("php", InputFileType::Test),
            _ => ("js", InputFileType::Main),
        };
        context
            .fs
            .add(
                InputFile::new("foo", &format!("src/f{i}"))
                    .with_language(language)
                    .with_type(file_type),
            )
            .unwrap();
    }
    context.settings.set("sonar.java.binaries", "target");
    let optimizer = SensorOptimizer::from_context(&context);

    let descriptors: Vec<SensorDescriptor> = ["java", "php", "js", "cobol"]
        .iter()
        .flat_map(|language| {
            InputFileType::all().iter().map(move |file_type| {
                SensorDescriptor::new()
                    .named(format!("{language}-{file_type}"))
                    .only_on_languages([*language])
                    .only_on_file_type(*file_type)
                    .require_property("sonar.java.binaries")
            })
        })
        .collect();

    let sequential: Vec<bool> = descriptors
        .iter()
        .map(|d| optimizer.should_execute(d))
        .collect();
    let parallel: Vec<bool> = descriptors
        .par_iter()
        .map(|d| optimizer.should_execute(d))
        .collect();

    assert_eq!(sequential, parallel);
    let executed: BTreeSet<&str> = descriptors
        .iter()
        .zip(&sequential)
        .filter(|(_, run)| **run)
        .map(|(d, _)| d.name())
        .collect();
    assert_eq!(
        executed,
        BTreeSet::from(["java-MAIN", "php-TEST", "js-MAIN"])
    );
}
