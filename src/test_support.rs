//! Test doubles shared by service and handler tests.

use std::io;
use std::sync::{Arc, Mutex};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web::Data};
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use mockable::Clock;
use tracing::subscriber::DefaultGuard;

use crate::db::memory_pool;
use crate::repository::SqlStore;
use crate::routes;
use crate::service::{DirectoryService, TimesheetService};

pub const TEST_ZONE: Tz = chrono_tz::America::New_York;

/// 2024-03-15 10:30:45 in New York, a Friday.
pub fn friday_morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 45)
        .single()
        .expect("valid instant")
}

pub struct TestClock(Mutex<DateTime<Utc>>);

impl TestClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.lock_clock() = now;
    }

    pub fn advance_seconds(&self, seconds: i64) {
        *self.lock_clock() += TimeDelta::seconds(seconds);
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        self.0.lock().expect("clock mutex")
    }
}

impl Clock for TestClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

pub struct TestServices {
    pub directory: DirectoryService,
    pub timesheet: TimesheetService,
    pub clock: Arc<TestClock>,
}

/// Both services over a fresh in-memory store, clock set to [`friday_morning`].
pub async fn test_services() -> TestServices {
    let store = Arc::new(SqlStore::new(memory_pool().await));
    let clock = Arc::new(TestClock::new(friday_morning()));

    TestServices {
        directory: DirectoryService::new(store.clone(), store.clone()),
        timesheet: TimesheetService::new(store.clone(), store, clock.clone(), TEST_ZONE),
        clock,
    }
}

/// The application's routes wired to `services`, without rate limiting.
pub fn test_app(
    services: &TestServices,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .app_data(Data::new(services.directory.clone()))
        .app_data(Data::new(services.timesheet.clone()))
        .configure(routes::configure)
}

/// Log lines written while a [`capture_logs`] guard is alive.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Routes this thread's tracing events into a buffer until the guard drops.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();

    (logs, tracing::subscriber::set_default(subscriber))
}
