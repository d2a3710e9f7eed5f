//! Fixed demonstration sequence over the school facade.
//!
//! Seeds two classes, two teachers and two subjects, printing class rosters
//! and teacher subject lists in between. Registered teacher names
//! (`Teacher 1`) intentionally differ from the names embedded in subjects
//! (`Teacher1`); subject lookups go by the embedded name only.

use crate::model::record::{Student, Subject, Teacher};
use crate::repo::school_repo::{RepoResult, SchoolRepository};
use crate::service::school_service::SchoolService;
use std::io::{self, Write};

pub const CLASS_A_STUDENTS: [&str; 6] = [
    "Ragendhu Ramesh",
    "Gerard Joshua",
    "Priyanka Shivappa",
    "Harini Purushotham",
    "Harathi V Raman",
    "Vyshnavi V",
];

pub const CLASS_B_STUDENTS: [&str; 4] = [
    "Anjali P Shaji",
    "Neha Ravi",
    "Gaddam Akheel",
    "Rini Varghese",
];

/// Adds the ten students and two teachers of the opening roster.
pub fn seed_roster<R: SchoolRepository>(
    service: &mut SchoolService<R>,
    out: &mut impl Write,
) -> io::Result<()> {
    for name in CLASS_A_STUDENTS {
        report("student", service.add_student(Student::new(name, "ClassA")), out)?;
    }
    for name in CLASS_B_STUDENTS {
        report("student", service.add_student(Student::new(name, "ClassB")), out)?;
    }

    report("teacher", service.add_teacher(Teacher::new("Teacher 1", "ClassA")), out)?;
    report("teacher", service.add_teacher(Teacher::new("Teacher 2", "ClassB")), out)?;
    Ok(())
}

/// Runs the whole sequence and writes the transcript to `out`.
///
/// Rejected records are reported in the transcript and do not stop the
/// sequence; only I/O errors on `out` are returned.
pub fn run_demo<R: SchoolRepository>(
    service: &mut SchoolService<R>,
    out: &mut impl Write,
) -> io::Result<()> {
    seed_roster(service, out)?;

    let science = Subject::new("Science", "MATH101", Teacher::new("Teacher1", "ClassA"));
    report("subject", service.add_subject(science), out)?;

    print_class(service, "ClassA", out)?;
    writeln!(out)?;
    print_subjects(service, "Teacher1", out)?;

    let computing = Subject::new(
        "Computer Science",
        "Cs102",
        Teacher::new("Teacher2", "ClassB"),
    );
    report("subject", service.add_subject(computing), out)?;

    writeln!(out)?;
    print_class(service, "ClassB", out)?;
    writeln!(out)?;
    print_subjects(service, "Teacher2", out)?;
    Ok(())
}

fn print_class<R: SchoolRepository>(
    service: &SchoolService<R>,
    class_and_section: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "Students in {class_and_section}:")?;
    for student in service.students_in_class(class_and_section) {
        writeln!(out, "{}", student.name)?;
    }
    Ok(())
}

fn print_subjects<R: SchoolRepository>(
    service: &SchoolService<R>,
    teacher_name: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "Subjects taught by {teacher_name}:")?;
    for subject in service.subjects_taught_by(teacher_name) {
        writeln!(out, "{}", subject.name)?;
    }
    Ok(())
}

fn report(kind: &str, result: RepoResult<()>, out: &mut impl Write) -> io::Result<()> {
    if let Err(err) = result {
        writeln!(out, "Error adding {kind}: {err}")?;
    }
    Ok(())
}
