use super::*;

#[test]
fn reporting_task_delivers_output_to_receiver() {
    let (driver, rx) = reporting_task(async { 41 + 1 });
    futures::executor::block_on(driver);
    assert_eq!(futures::executor::block_on(rx), Ok(42));
}

#[test]
fn reporting_task_completes_when_receiver_dropped() {
    let ran = std::cell::Cell::new(false);
    let (driver, rx) = reporting_task(async {
        ran.set(true);
    });
    drop(rx);
    futures::executor::block_on(driver);
    assert!(ran.get());
}

#[test]
fn receiver_reports_nothing_until_driver_runs() {
    let (driver, mut rx) = reporting_task(async { "done" });
    assert_eq!(rx.try_recv(), Ok(None));
    futures::executor::block_on(driver);
    assert_eq!(rx.try_recv(), Ok(Some("done")));
}
