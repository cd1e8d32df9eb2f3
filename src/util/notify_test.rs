use super::*;

use std::sync::Mutex;

#[test]
fn notify_delivers_text_to_the_sink() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&seen);
    let notifier = Notifier::new(move |text| sink.lock().unwrap().push(text.to_owned()));

    notifier.notify("first");
    notifier.notify("second");

    assert_eq!(*seen.lock().unwrap(), ["first", "second"]);
}

#[test]
fn clones_share_the_same_sink() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&seen);
    let notifier = Notifier::new(move |text| sink.lock().unwrap().push(text.to_owned()));

    let clone = notifier.clone();
    notifier.notify("from original");
    clone.notify("from clone");

    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[test]
fn alert_notifier_is_a_no_op_off_browser() {
    // Must not panic on the native test target.
    Notifier::alert().notify("hello");
}
