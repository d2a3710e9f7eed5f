use school_core::demo::{run_demo, CLASS_A_STUDENTS, CLASS_B_STUDENTS};
use school_core::{
    init_logging, logging_status, InMemorySchoolRepository, SchoolDataStore, SchoolService,
};

const EXPECTED_TRANSCRIPT: &str = "\
Students in ClassA:
Ragendhu Ramesh
Gerard Joshua
Priyanka Shivappa
Harini Purushotham
Harathi V Raman
Vyshnavi V

Subjects taught by Teacher1:
Science

Students in ClassB:
Anjali P Shaji
Neha Ravi
Gaddam Akheel
Rini Varghese

Subjects taught by Teacher2:
Computer Science
";

fn run_to_string(store: &mut SchoolDataStore) -> String {
    let mut service = SchoolService::new(InMemorySchoolRepository::new(store));
    let mut out = Vec::new();
    run_demo(&mut service, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn demo_prints_expected_transcript() {
    let mut store = SchoolDataStore::new();
    assert_eq!(run_to_string(&mut store), EXPECTED_TRANSCRIPT);
}

#[test]
fn demo_leaves_expected_store_state() {
    let mut store = SchoolDataStore::new();
    run_to_string(&mut store);

    assert_eq!(
        store.students().len(),
        CLASS_A_STUDENTS.len() + CLASS_B_STUDENTS.len()
    );
    let teacher_names: Vec<&str> = store.teachers().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(teacher_names, ["Teacher 1", "Teacher 2"]);
    let subject_codes: Vec<&str> = store
        .subjects()
        .iter()
        .map(|s| s.subject_code.as_str())
        .collect();
    assert_eq!(subject_codes, ["MATH101", "Cs102"]);
}

#[test]
fn demo_queries_match_scripted_steps() {
    let mut store = SchoolDataStore::new();
    run_to_string(&mut store);
    let service = SchoolService::new(InMemorySchoolRepository::new(&mut store));

    let class_b: Vec<String> = service
        .students_in_class("ClassB")
        .into_iter()
        .map(|student| student.name)
        .collect();
    assert_eq!(class_b, CLASS_B_STUDENTS);

    let taught: Vec<String> = service
        .subjects_taught_by("Teacher2")
        .into_iter()
        .map(|subject| subject.name)
        .collect();
    assert_eq!(taught, ["Computer Science"]);
    assert!(service.subjects_taught_by("Teacher 2").is_empty());
}

#[test]
fn demo_runs_with_file_logging_enabled() {
    let log_dir = tempfile::tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap().to_string();

    init_logging("debug", &log_dir_str).unwrap();
    init_logging("debug", &log_dir_str).unwrap();
    let conflict = init_logging("info", &log_dir_str).unwrap_err();
    assert!(conflict.to_string().contains("refusing to switch"));

    let mut store = SchoolDataStore::new();
    assert_eq!(run_to_string(&mut store), EXPECTED_TRANSCRIPT);

    let (level, dir) = logging_status().unwrap();
    assert_eq!(level, "debug");
    assert_eq!(dir, log_dir.path());
}
