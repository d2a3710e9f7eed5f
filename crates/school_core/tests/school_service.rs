use school_core::{
    InMemorySchoolRepository, RepoError, SchoolDataStore, SchoolService, Student, Subject, Teacher,
};
use uuid::Uuid;

#[test]
fn service_adds_and_queries_through_repository() {
    let mut store = SchoolDataStore::new();
    let mut service = SchoolService::new(InMemorySchoolRepository::new(&mut store));

    service.add_student(Student::new("Ragendhu Ramesh", "ClassA")).unwrap();
    service.add_teacher(Teacher::new("Teacher 1", "ClassA")).unwrap();
    service
        .add_subject(Subject::new("Science", "MATH101", Teacher::new("Teacher1", "ClassA")))
        .unwrap();

    assert_eq!(service.students_in_class("ClassA").len(), 1);
    assert_eq!(service.subjects_taught_by("Teacher1").len(), 1);
    assert_eq!(service.list_teachers().len(), 1);
    drop(service);

    assert_eq!(store.students().len(), 1);
    assert_eq!(store.teachers().len(), 1);
    assert_eq!(store.subjects().len(), 1);
}

#[test]
fn update_and_remove_signal_not_found_consistently() {
    let mut store = SchoolDataStore::new();
    let mut service = SchoolService::new(InMemorySchoolRepository::new(&mut store));

    let update_err = service
        .update_student(Uuid::new_v4(), Student::new("Ghost", "ClassA"))
        .unwrap_err();
    let remove_err = service.remove_subject(Uuid::new_v4()).unwrap_err();

    assert!(update_err.is_not_found());
    assert!(remove_err.is_not_found());
    assert!(service.list_students().is_empty());
    assert!(service.list_subjects().is_empty());
}

#[test]
fn rejected_write_can_be_ignored_and_later_writes_succeed() {
    let mut store = SchoolDataStore::new();
    let mut service = SchoolService::new(InMemorySchoolRepository::new(&mut store));

    service.add_student(Student::new("Priyanka Shivappa", "ClassA")).unwrap();
    let mut invalid = Student::new("Nobody", "ClassA");
    invalid.id = Uuid::nil();
    let err = service.add_student(invalid).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    service.add_student(Student::new("Harathi V Raman", "ClassA")).unwrap();
    let names: Vec<String> = service
        .students_in_class("ClassA")
        .into_iter()
        .map(|student| student.name)
        .collect();
    assert_eq!(names, ["Priyanka Shivappa", "Harathi V Raman"]);
}

#[test]
fn re_adding_a_stored_record_appends_another_copy() {
    let mut store = SchoolDataStore::new();
    let mut service = SchoolService::new(InMemorySchoolRepository::new(&mut store));

    let science = Subject::new("Science", "MATH101", Teacher::new("Teacher1", "ClassA"));
    service.add_subject(science.clone()).unwrap();
    service.add_subject(science.clone()).unwrap();

    assert_eq!(service.subjects_taught_by("Teacher1"), vec![science.clone(), science]);
}

#[test]
fn shared_store_backs_a_service_session() {
    let marker = format!("Class-{}", Uuid::new_v4());
    {
        let mut store = SchoolDataStore::lock_shared();
        let mut service = SchoolService::new(InMemorySchoolRepository::new(&mut store));
        service.add_student(Student::new("Rini Varghese", marker.as_str())).unwrap();
    }

    let mut store = SchoolDataStore::lock_shared();
    let service = SchoolService::new(InMemorySchoolRepository::new(&mut store));
    assert_eq!(service.students_in_class(&marker).len(), 1);
}
