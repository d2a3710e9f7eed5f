//! Demo entry point.
//!
//! # Responsibility
//! - Run the fixed school record sequence against the shared store.
//! - Keep stdout limited to the transcript; diagnostics go to the log file.

use school_core::{
    default_log_level, init_logging, InMemorySchoolRepository, SchoolDataStore, SchoolService,
};
use std::io::Write;

fn main() {
    let log_dir = std::env::temp_dir().join("school_records").join("logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }

    let mut store = SchoolDataStore::lock_shared();
    let mut service = SchoolService::new(InMemorySchoolRepository::new(&mut store));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = school_core::demo::run_demo(&mut service, &mut out).and_then(|()| out.flush())
    {
        log::error!("event=demo_run module=cli status=error error={err}");
    }
}
