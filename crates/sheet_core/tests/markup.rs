use pretty_assertions::assert_eq;
use sheet_core::{
    escape_html, LoadingIndicator, Notification, NotificationBoard, NotificationContainer,
    NotificationId, Severity, DEFAULT_LOADING_MESSAGE,
};

#[test]
fn loading_indicator_defaults_to_loading_message() {
    let loader = LoadingIndicator::default();
    assert_eq!(loader.message(), DEFAULT_LOADING_MESSAGE);
    assert_eq!(
        loader.to_html(),
        "<div class=\"loader\">\n    <div class=\"spinner\"></div>\n    <p>Loading...</p>\n</div>"
    );
}

#[test]
fn loading_indicator_escapes_message() {
    let loader = LoadingIndicator::new("<b>Evaluating</b> & scoring");
    assert!(loader
        .to_html()
        .contains("<p>&lt;b&gt;Evaluating&lt;/b&gt; &amp; scoring</p>"));
}

#[test]
fn escape_html_covers_quotes() {
    assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#39;c");
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn severity_parses_and_renders() {
    assert_eq!("danger".parse::<Severity>().unwrap(), Severity::Danger);
    assert_eq!(" Success ".parse::<Severity>().unwrap(), Severity::Success);
    assert_eq!("error".parse::<Severity>().unwrap(), Severity::Danger);
    assert!("loud".parse::<Severity>().is_err());
    assert_eq!(Severity::default(), Severity::Info);
    assert_eq!(Severity::Warning.to_string(), "warning");
}

#[test]
fn notification_renders_as_alert_div() {
    let n = Notification::new(NotificationId(1), "Saved <exam>", Severity::Success);
    assert_eq!(n.css_class(), "alert alert-success");
    assert_eq!(
        n.to_html(),
        "<div class=\"alert alert-success\">Saved &lt;exam&gt;</div>"
    );
}

#[test]
fn board_prepends_newest_first() {
    let board = NotificationBoard::new();
    board.prepend(Notification::new(NotificationId(1), "first", Severity::Info));
    board.prepend(Notification::new(NotificationId(2), "second", Severity::Danger));

    let ids: Vec<_> = board.snapshot().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![NotificationId(2), NotificationId(1)]);
    assert_eq!(board.len(), 2);
}

#[test]
fn board_remove_is_idempotent() {
    let board = NotificationBoard::new();
    board.prepend(Notification::new(NotificationId(5), "gone soon", Severity::Info));

    assert!(board.remove(NotificationId(5)));
    assert!(!board.remove(NotificationId(5)));
    assert!(!board.remove(NotificationId(99)));
    assert!(board.is_empty());
    assert!(!board.contains(NotificationId(5)));
}
